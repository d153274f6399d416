use async_trait::async_trait;

use super::cards_model::{CardsOverview, CreditCard, NewCreditCard};
use crate::errors::Result;

/// Trait for credit card repository operations
#[async_trait]
pub trait CardRepositoryTrait: Send + Sync {
    fn list_cards(&self, user_id: &str) -> Result<Vec<CreditCard>>;
    fn get_card(&self, user_id: &str, card_id: &str) -> Result<CreditCard>;
    async fn insert_card(&self, card: CreditCard) -> Result<CreditCard>;
    async fn update_card(&self, card: CreditCard) -> Result<CreditCard>;
    async fn delete_card(&self, user_id: &str, card_id: &str) -> Result<usize>;
}

/// Trait for credit card service operations
#[async_trait]
pub trait CardServiceTrait: Send + Sync {
    fn list_cards(&self, user_id: &str) -> Result<Vec<CreditCard>>;
    fn get_overview(&self, user_id: &str) -> Result<CardsOverview>;
    async fn create_card(&self, user_id: &str, input: NewCreditCard) -> Result<CreditCard>;
    async fn update_card(
        &self,
        user_id: &str,
        card_id: &str,
        changes: NewCreditCard,
    ) -> Result<CreditCard>;
    async fn delete_card(&self, user_id: &str, card_id: &str) -> Result<()>;
}
