use async_trait::async_trait;

use super::debts_model::{Debt, DebtsOverview, NewDebt};
use super::strategy::{PayoffSimulation, PayoffStrategy};
use crate::errors::Result;

/// Trait for debt repository operations
#[async_trait]
pub trait DebtRepositoryTrait: Send + Sync {
    fn list_debts(&self, user_id: &str) -> Result<Vec<Debt>>;
    fn get_debt(&self, user_id: &str, debt_id: &str) -> Result<Debt>;
    async fn insert_debt(&self, debt: Debt) -> Result<Debt>;
    async fn update_debt(&self, debt: Debt) -> Result<Debt>;
    async fn delete_debt(&self, user_id: &str, debt_id: &str) -> Result<usize>;
}

/// Trait for debt service operations
#[async_trait]
pub trait DebtServiceTrait: Send + Sync {
    fn list_debts(&self, user_id: &str) -> Result<Vec<Debt>>;
    fn get_overview(&self, user_id: &str) -> Result<DebtsOverview>;
    /// Active debts in repayment order.
    fn get_strategy(&self, user_id: &str, strategy: PayoffStrategy) -> Result<Vec<Debt>>;
    fn simulate_payoff(&self, user_id: &str, monthly_payment: f64) -> Result<PayoffSimulation>;
    async fn create_debt(&self, user_id: &str, input: NewDebt) -> Result<Debt>;
    async fn update_debt(&self, user_id: &str, debt_id: &str, changes: NewDebt) -> Result<Debt>;
    async fn delete_debt(&self, user_id: &str, debt_id: &str) -> Result<()>;
}
