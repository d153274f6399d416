use std::sync::Arc;

use super::categories_model::{Category, CategoryKind};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { repository }
    }
}

impl CategoryServiceTrait for CategoryService {
    fn list_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>> {
        self.repository.list_categories(kind)
    }

    fn get_category(&self, category_id: &str) -> Result<Category> {
        self.repository.get_category(category_id)
    }
}

/// Rejects a record whose optional category reference points nowhere.
pub fn ensure_category_exists(
    repository: &dyn CategoryRepositoryTrait,
    category_id: Option<&str>,
) -> Result<()> {
    let Some(category_id) = category_id else {
        return Ok(());
    };
    match repository.get_category(category_id) {
        Ok(_) => Ok(()),
        Err(Error::NotFound { .. }) => Err(Error::invalid_input(format!(
            "Unknown category '{}'",
            category_id
        ))),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use chrono::NaiveDate;

    pub(crate) struct StaticCategories(pub Vec<Category>);

    impl StaticCategories {
        pub(crate) fn defaults() -> Self {
            let created_at = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            StaticCategories(vec![
                Category {
                    id: "salary".to_string(),
                    name: "Salary".to_string(),
                    kind: CategoryKind::Income,
                    icon: None,
                    color: None,
                    created_at,
                },
                Category {
                    id: "housing".to_string(),
                    name: "Housing".to_string(),
                    kind: CategoryKind::Expense,
                    icon: None,
                    color: None,
                    created_at,
                },
            ])
        }
    }

    impl CategoryRepositoryTrait for StaticCategories {
        fn list_categories(&self, kind: Option<CategoryKind>) -> Result<Vec<Category>> {
            Ok(self
                .0
                .iter()
                .filter(|c| kind.map_or(true, |k| c.kind == k))
                .cloned()
                .collect())
        }

        fn get_category(&self, category_id: &str) -> Result<Category> {
            self.0
                .iter()
                .find(|c| c.id == category_id)
                .cloned()
                .ok_or_else(|| Error::not_found("Category", category_id))
        }
    }

    #[test]
    fn list_filters_by_kind() {
        let service = CategoryService::new(Arc::new(StaticCategories::defaults()));
        assert_eq!(service.list_categories(None).unwrap().len(), 2);
        let income = service.list_categories(Some(CategoryKind::Income)).unwrap();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].id, "salary");
    }

    #[test]
    fn unknown_category_reference_is_a_validation_error() {
        let repo = StaticCategories::defaults();
        assert!(ensure_category_exists(&repo, None).is_ok());
        assert!(ensure_category_exists(&repo, Some("housing")).is_ok());
        let err = ensure_category_exists(&repo, Some("nope")).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn kind_round_trips_through_its_storage_string() {
        assert_eq!("expense".parse::<CategoryKind>().unwrap(), CategoryKind::Expense);
        assert!("other".parse::<CategoryKind>().is_err());
    }
}
