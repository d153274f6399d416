//! Database models for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finboard_core::categories::Category;
use finboard_core::Error;

use crate::errors::parse_column;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<CategoryDB> for Category {
    type Error = Error;

    fn try_from(db: CategoryDB) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: parse_column("categories.kind", &db.kind)?,
            id: db.id,
            name: db.name,
            icon: db.icon,
            color: db.color,
            created_at: db.created_at,
        })
    }
}
