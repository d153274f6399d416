use async_trait::async_trait;

use super::bills_model::{Bill, BillsOverview, NewBill};
use crate::errors::Result;

/// Trait for bill repository operations
#[async_trait]
pub trait BillRepositoryTrait: Send + Sync {
    /// Bills owned by `user_id`, newest first.
    fn list_bills(&self, user_id: &str) -> Result<Vec<Bill>>;
    fn get_bill(&self, user_id: &str, bill_id: &str) -> Result<Bill>;
    async fn insert_bill(&self, bill: Bill) -> Result<Bill>;
    async fn update_bill(&self, bill: Bill) -> Result<Bill>;
    async fn delete_bill(&self, user_id: &str, bill_id: &str) -> Result<usize>;
}

/// Trait for bill service operations
#[async_trait]
pub trait BillServiceTrait: Send + Sync {
    fn list_bills(&self, user_id: &str) -> Result<Vec<Bill>>;
    fn get_overview(&self, user_id: &str) -> Result<BillsOverview>;
    async fn create_bill(&self, user_id: &str, new_bill: NewBill) -> Result<Bill>;
    async fn update_bill(&self, user_id: &str, bill_id: &str, changes: NewBill) -> Result<Bill>;
    async fn delete_bill(&self, user_id: &str, bill_id: &str) -> Result<()>;
    async fn toggle_bill_status(&self, user_id: &str, bill_id: &str) -> Result<Bill>;
}
