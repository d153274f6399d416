use std::sync::Arc;

use diesel::prelude::*;

use finboard_core::categories::{Category, CategoryKind, CategoryRepositoryTrait};
use finboard_core::{Error, Result};

use super::model::CategoryDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::categories;

/// Categories are seeded by migration and read-only at runtime.
pub struct CategoryRepository {
    pool: Arc<DbPool>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CategoryRepository { pool }
    }
}

impl CategoryRepositoryTrait for CategoryRepository {
    fn list_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = categories::table
            .select(CategoryDB::as_select())
            .order((categories::kind.asc(), categories::name.asc()))
            .into_boxed();
        if let Some(kind) = kind {
            query = query.filter(categories::kind.eq(kind.as_str()));
        }
        query
            .load::<CategoryDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Category::try_from)
            .collect()
    }

    fn get_category(&self, category_id: &str) -> Result<Category> {
        let mut conn = get_connection(&self.pool)?;
        categories::table
            .find(category_id)
            .select(CategoryDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| Error::not_found("Category", category_id))
            .and_then(Category::try_from)
    }
}
