use super::categories_model::{Category, CategoryKind};
use crate::errors::Result;

/// Trait for category repository operations
pub trait CategoryRepositoryTrait: Send + Sync {
    fn list_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>>;
    fn get_category(&self, category_id: &str) -> Result<Category>;
}

/// Trait for category service operations
pub trait CategoryServiceTrait: Send + Sync {
    fn list_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>>;
    fn get_category(&self, category_id: &str) -> Result<Category>;
}
