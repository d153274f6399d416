use async_trait::async_trait;

use super::investments_model::{Investment, InvestmentsOverview, NewInvestment};
use super::projection::InvestmentProjection;
use crate::errors::Result;

/// Trait for investment repository operations
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Investments owned by `user_id`, most recent `invested_on` first.
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>>;
    fn get_investment(&self, user_id: &str, investment_id: &str) -> Result<Investment>;
    async fn insert_investment(&self, investment: Investment) -> Result<Investment>;
    async fn update_investment(&self, investment: Investment) -> Result<Investment>;
    async fn delete_investment(&self, user_id: &str, investment_id: &str) -> Result<usize>;
}

/// Trait for investment service operations
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>>;
    fn get_overview(&self, user_id: &str) -> Result<InvestmentsOverview>;
    fn get_projection(&self, user_id: &str, years: u32) -> Result<Vec<InvestmentProjection>>;
    async fn create_investment(&self, user_id: &str, input: NewInvestment) -> Result<Investment>;
    async fn update_investment(
        &self,
        user_id: &str,
        investment_id: &str,
        changes: NewInvestment,
    ) -> Result<Investment>;
    async fn delete_investment(&self, user_id: &str, investment_id: &str) -> Result<()>;
}
