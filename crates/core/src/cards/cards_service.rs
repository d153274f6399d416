use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::cards_model::{CardsOverview, CreditCard, NewCreditCard};
use super::cards_traits::{CardRepositoryTrait, CardServiceTrait};
use crate::errors::{Error, Result};

pub struct CardService {
    repository: Arc<dyn CardRepositoryTrait>,
}

impl CardService {
    pub fn new(repository: Arc<dyn CardRepositoryTrait>) -> Self {
        CardService { repository }
    }
}

#[async_trait]
impl CardServiceTrait for CardService {
    fn list_cards(&self, user_id: &str) -> Result<Vec<CreditCard>> {
        self.repository.list_cards(user_id)
    }

    fn get_overview(&self, user_id: &str) -> Result<CardsOverview> {
        let cards = self.repository.list_cards(user_id)?;
        Ok(CardsOverview::from_cards(&cards))
    }

    async fn create_card(&self, user_id: &str, input: NewCreditCard) -> Result<CreditCard> {
        input.validate()?;
        let now = Utc::now().naive_utc();
        let card = CreditCard {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: input.name.trim().to_string(),
            credit_limit: input.credit_limit,
            used_limit: input.used_limit,
            statement_due_day: input.statement_due_day,
            best_purchase_day: input.best_purchase_day,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_card(card).await
    }

    async fn update_card(
        &self,
        user_id: &str,
        card_id: &str,
        changes: NewCreditCard,
    ) -> Result<CreditCard> {
        changes.validate()?;
        let existing = self.repository.get_card(user_id, card_id)?;
        let card = CreditCard {
            name: changes.name.trim().to_string(),
            credit_limit: changes.credit_limit,
            used_limit: changes.used_limit,
            statement_due_day: changes.statement_due_day,
            best_purchase_day: changes.best_purchase_day,
            is_active: changes.is_active,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        self.repository.update_card(card).await
    }

    async fn delete_card(&self, user_id: &str, card_id: &str) -> Result<()> {
        match self.repository.delete_card(user_id, card_id).await? {
            0 => Err(Error::not_found("Card", card_id)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockCardRepository {
        cards: Mutex<Vec<CreditCard>>,
    }

    #[async_trait]
    impl CardRepositoryTrait for MockCardRepository {
        fn list_cards(&self, user_id: &str) -> Result<Vec<CreditCard>> {
            Ok(self
                .cards
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_card(&self, user_id: &str, card_id: &str) -> Result<CreditCard> {
            self.cards
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.user_id == user_id && c.id == card_id)
                .cloned()
                .ok_or_else(|| Error::not_found("Card", card_id))
        }

        async fn insert_card(&self, card: CreditCard) -> Result<CreditCard> {
            self.cards.lock().unwrap().push(card.clone());
            Ok(card)
        }

        async fn update_card(&self, card: CreditCard) -> Result<CreditCard> {
            let mut cards = self.cards.lock().unwrap();
            let slot = cards
                .iter_mut()
                .find(|c| c.id == card.id)
                .ok_or_else(|| Error::not_found("Card", card.id.clone()))?;
            *slot = card.clone();
            Ok(card)
        }

        async fn delete_card(&self, user_id: &str, card_id: &str) -> Result<usize> {
            let mut cards = self.cards.lock().unwrap();
            let before = cards.len();
            cards.retain(|c| !(c.user_id == user_id && c.id == card_id));
            Ok(before - cards.len())
        }
    }

    fn card(limit: f64, used: f64, active: bool) -> NewCreditCard {
        NewCreditCard {
            name: "Visa".to_string(),
            credit_limit: limit,
            used_limit: used,
            statement_due_day: Some(10),
            best_purchase_day: Some(3),
            is_active: active,
        }
    }

    #[tokio::test]
    async fn overview_ignores_inactive_cards() {
        let service = CardService::new(Arc::new(MockCardRepository::default()));
        service.create_card("u1", card(5000.0, 1000.0, true)).await.unwrap();
        service.create_card("u1", card(3000.0, 500.0, true)).await.unwrap();
        service.create_card("u1", card(9000.0, 9000.0, false)).await.unwrap();

        let overview = service.get_overview("u1").unwrap();
        assert_eq!(overview.total_limit, 8000.0);
        assert_eq!(overview.total_used, 1500.0);
        assert_eq!(overview.available, 6500.0);
        assert_eq!(overview.active_count, 2);
        assert!((overview.utilization_pct - 18.75).abs() < 1e-9);
    }

    #[tokio::test]
    async fn utilization_is_zero_without_limit() {
        let service = CardService::new(Arc::new(MockCardRepository::default()));
        let overview = service.get_overview("u1").unwrap();
        assert_eq!(overview.utilization_pct, 0.0);
        assert_eq!(overview.active_count, 0);
    }

    #[tokio::test]
    async fn rejects_days_out_of_range() {
        let service = CardService::new(Arc::new(MockCardRepository::default()));
        let mut input = card(100.0, 0.0, true);
        input.best_purchase_day = Some(40);
        assert!(service.create_card("u1", input).await.is_err());
    }

    #[test]
    fn new_card_defaults_to_active_with_nothing_used() {
        let input: NewCreditCard =
            serde_json::from_str(r#"{"name":"Visa","creditLimit":1000}"#).unwrap();
        assert!(input.is_active);
        assert_eq!(input.used_limit, 0.0);
        assert_eq!(input.statement_due_day, None);
    }
}
