//! Categories module - shared income/expense categories.

mod categories_model;
mod categories_service;
mod categories_traits;

pub use categories_model::{Category, CategoryKind};
pub use categories_service::{ensure_category_exists, CategoryService};
pub use categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};

#[cfg(test)]
pub(crate) use categories_service::tests::StaticCategories;
