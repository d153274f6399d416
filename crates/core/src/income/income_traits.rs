use async_trait::async_trait;

use super::income_model::{IncomeEntry, IncomeOverview, NewIncomeEntry};
use crate::errors::Result;
use crate::utils::YearMonth;

/// Trait for income repository operations
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    /// Entries owned by `user_id`, most recently received first.
    fn list_income(&self, user_id: &str) -> Result<Vec<IncomeEntry>>;
    fn get_income(&self, user_id: &str, income_id: &str) -> Result<IncomeEntry>;
    async fn insert_income(&self, entry: IncomeEntry) -> Result<IncomeEntry>;
    async fn update_income(&self, entry: IncomeEntry) -> Result<IncomeEntry>;
    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize>;
}

/// Trait for income service operations
#[async_trait]
pub trait IncomeServiceTrait: Send + Sync {
    fn list_income(&self, user_id: &str) -> Result<Vec<IncomeEntry>>;
    fn get_overview(&self, user_id: &str, period: YearMonth) -> Result<IncomeOverview>;
    async fn create_income(&self, user_id: &str, input: NewIncomeEntry) -> Result<IncomeEntry>;
    async fn update_income(
        &self,
        user_id: &str,
        income_id: &str,
        changes: NewIncomeEntry,
    ) -> Result<IncomeEntry>;
    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<()>;
}
