use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::income_model::{IncomeEntry, IncomeOverview, NewIncomeEntry};
use super::income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::categories::{ensure_category_exists, CategoryRepositoryTrait};
use crate::errors::{Error, Result};
use crate::utils::YearMonth;

pub struct IncomeService {
    repository: Arc<dyn IncomeRepositoryTrait>,
    categories: Arc<dyn CategoryRepositoryTrait>,
}

impl IncomeService {
    pub fn new(
        repository: Arc<dyn IncomeRepositoryTrait>,
        categories: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        IncomeService {
            repository,
            categories,
        }
    }
}

#[async_trait]
impl IncomeServiceTrait for IncomeService {
    fn list_income(&self, user_id: &str) -> Result<Vec<IncomeEntry>> {
        self.repository.list_income(user_id)
    }

    fn get_overview(&self, user_id: &str, period: YearMonth) -> Result<IncomeOverview> {
        let entries = self.repository.list_income(user_id)?;
        Ok(IncomeOverview::for_period(&entries, period))
    }

    async fn create_income(&self, user_id: &str, input: NewIncomeEntry) -> Result<IncomeEntry> {
        input.validate()?;
        ensure_category_exists(self.categories.as_ref(), input.category_id.as_deref())?;
        let now = Utc::now().naive_utc();
        let entry = IncomeEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            description: input.description.trim().to_string(),
            amount: input.amount,
            received_on: input.received_on,
            category_id: input.category_id,
            is_recurring: input.is_recurring,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_income(entry).await
    }

    async fn update_income(
        &self,
        user_id: &str,
        income_id: &str,
        changes: NewIncomeEntry,
    ) -> Result<IncomeEntry> {
        changes.validate()?;
        ensure_category_exists(self.categories.as_ref(), changes.category_id.as_deref())?;
        let existing = self.repository.get_income(user_id, income_id)?;
        let entry = IncomeEntry {
            description: changes.description.trim().to_string(),
            amount: changes.amount,
            received_on: changes.received_on,
            category_id: changes.category_id,
            is_recurring: changes.is_recurring,
            notes: changes.notes,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        self.repository.update_income(entry).await
    }

    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<()> {
        match self.repository.delete_income(user_id, income_id).await? {
            0 => Err(Error::not_found("Income", income_id)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::StaticCategories;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockIncomeRepository {
        entries: Mutex<Vec<IncomeEntry>>,
    }

    #[async_trait]
    impl IncomeRepositoryTrait for MockIncomeRepository {
        fn list_income(&self, user_id: &str) -> Result<Vec<IncomeEntry>> {
            let mut entries: Vec<IncomeEntry> = self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.user_id == user_id)
                .cloned()
                .collect();
            entries.sort_by(|a, b| b.received_on.cmp(&a.received_on));
            Ok(entries)
        }

        fn get_income(&self, user_id: &str, income_id: &str) -> Result<IncomeEntry> {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.user_id == user_id && e.id == income_id)
                .cloned()
                .ok_or_else(|| Error::not_found("Income", income_id))
        }

        async fn insert_income(&self, entry: IncomeEntry) -> Result<IncomeEntry> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(entry)
        }

        async fn update_income(&self, entry: IncomeEntry) -> Result<IncomeEntry> {
            let mut entries = self.entries.lock().unwrap();
            let slot = entries
                .iter_mut()
                .find(|e| e.id == entry.id)
                .ok_or_else(|| Error::not_found("Income", entry.id.clone()))?;
            *slot = entry.clone();
            Ok(entry)
        }

        async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| !(e.user_id == user_id && e.id == income_id));
            Ok(before - entries.len())
        }
    }

    fn entry(description: &str, amount: f64, on: (i32, u32, u32), recurring: bool) -> NewIncomeEntry {
        NewIncomeEntry {
            description: description.to_string(),
            amount,
            received_on: NaiveDate::from_ymd_opt(on.0, on.1, on.2).unwrap(),
            category_id: None,
            is_recurring: recurring,
            notes: None,
        }
    }

    fn service() -> IncomeService {
        IncomeService::new(
            Arc::new(MockIncomeRepository::default()),
            Arc::new(StaticCategories::defaults()),
        )
    }

    #[tokio::test]
    async fn one_off_income_outside_the_month_is_excluded() {
        let service = service();
        service
            .create_income("u1", entry("Salary", 5000.0, (2023, 11, 5), true))
            .await
            .unwrap();
        service
            .create_income("u1", entry("Freelance", 800.0, (2024, 3, 12), false))
            .await
            .unwrap();
        service
            .create_income("u1", entry("Bonus", 1000.0, (2024, 2, 28), false))
            .await
            .unwrap();

        let overview = service
            .get_overview("u1", YearMonth::new(2024, 3).unwrap())
            .unwrap();
        assert_eq!(overview.monthly_total, 5800.0);
        assert_eq!(overview.recurring_total, 5000.0);
        assert_eq!(overview.one_off_total_this_month, 800.0);
    }

    #[tokio::test]
    async fn same_month_in_a_different_year_does_not_count() {
        let service = service();
        service
            .create_income("u1", entry("Gift", 300.0, (2023, 3, 10), false))
            .await
            .unwrap();
        let overview = service
            .get_overview("u1", YearMonth::new(2024, 3).unwrap())
            .unwrap();
        assert_eq!(overview.monthly_total, 0.0);
    }

    #[tokio::test]
    async fn list_is_ordered_by_received_date_descending() {
        let service = service();
        service
            .create_income("u1", entry("Old", 1.0, (2024, 1, 1), false))
            .await
            .unwrap();
        service
            .create_income("u1", entry("New", 2.0, (2024, 5, 1), false))
            .await
            .unwrap();
        let list = service.list_income("u1").unwrap();
        assert_eq!(list[0].description, "New");
        assert_eq!(list[1].description, "Old");
    }

    #[tokio::test]
    async fn rejects_blank_description_and_unknown_category() {
        let service = service();
        assert!(service
            .create_income("u1", entry("  ", 1.0, (2024, 1, 1), false))
            .await
            .is_err());
        let mut input = entry("Salary", 1.0, (2024, 1, 1), true);
        input.category_id = Some("ghost".to_string());
        assert!(service.create_income("u1", input).await.is_err());
    }
}
