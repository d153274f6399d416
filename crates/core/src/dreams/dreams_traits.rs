use async_trait::async_trait;

use super::dreams_model::{
    Dream, DreamContribution, DreamsOverview, NewDream, NewDreamContribution,
};
use crate::errors::Result;

/// Trait for dream repository operations
#[async_trait]
pub trait DreamRepositoryTrait: Send + Sync {
    fn list_dreams(&self, user_id: &str) -> Result<Vec<Dream>>;
    fn get_dream(&self, user_id: &str, dream_id: &str) -> Result<Dream>;
    /// Contributions to one dream, most recent first.
    fn list_contributions(&self, dream_id: &str) -> Result<Vec<DreamContribution>>;
    async fn insert_dream(&self, dream: Dream) -> Result<Dream>;
    async fn update_dream(&self, dream: Dream) -> Result<Dream>;
    async fn delete_dream(&self, user_id: &str, dream_id: &str) -> Result<usize>;
    /// Stores the contribution and adds its amount to the dream's saved total
    /// in one transaction, returning the updated dream.
    async fn insert_contribution(
        &self,
        user_id: &str,
        contribution: DreamContribution,
    ) -> Result<Dream>;
}

/// Trait for dream service operations
#[async_trait]
pub trait DreamServiceTrait: Send + Sync {
    fn list_dreams(&self, user_id: &str) -> Result<Vec<Dream>>;
    fn get_overview(&self, user_id: &str) -> Result<DreamsOverview>;
    fn list_contributions(&self, user_id: &str, dream_id: &str) -> Result<Vec<DreamContribution>>;
    async fn create_dream(&self, user_id: &str, input: NewDream) -> Result<Dream>;
    async fn update_dream(&self, user_id: &str, dream_id: &str, changes: NewDream)
        -> Result<Dream>;
    async fn delete_dream(&self, user_id: &str, dream_id: &str) -> Result<()>;
    async fn add_contribution(
        &self,
        user_id: &str,
        dream_id: &str,
        input: NewDreamContribution,
    ) -> Result<Dream>;
}
