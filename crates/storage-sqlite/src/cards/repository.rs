use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use finboard_core::cards::{CardRepositoryTrait, CreditCard};
use finboard_core::{Error, Result};

use super::model::CreditCardDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::credit_cards;

pub struct CardRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CardRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CardRepository { pool, writer }
    }
}

#[async_trait]
impl CardRepositoryTrait for CardRepository {
    fn list_cards(&self, user_id: &str) -> Result<Vec<CreditCard>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = credit_cards::table
            .filter(credit_cards::user_id.eq(user_id))
            .order(credit_cards::created_at.desc())
            .select(CreditCardDB::as_select())
            .load::<CreditCardDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(CreditCard::from).collect())
    }

    fn get_card(&self, user_id: &str, card_id: &str) -> Result<CreditCard> {
        let mut conn = get_connection(&self.pool)?;
        credit_cards::table
            .filter(credit_cards::id.eq(card_id))
            .filter(credit_cards::user_id.eq(user_id))
            .select(CreditCardDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .map(CreditCard::from)
            .ok_or_else(|| Error::not_found("Card", card_id))
    }

    async fn insert_card(&self, card: CreditCard) -> Result<CreditCard> {
        let row = CreditCardDB::from(card);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CreditCard> {
                let stored = diesel::insert_into(credit_cards::table)
                    .values(&row)
                    .returning(CreditCardDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(CreditCard::from(stored))
            })
            .await
    }

    async fn update_card(&self, card: CreditCard) -> Result<CreditCard> {
        let row = CreditCardDB::from(card);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CreditCard> {
                diesel::update(
                    credit_cards::table
                        .filter(credit_cards::id.eq(&row.id))
                        .filter(credit_cards::user_id.eq(&row.user_id)),
                )
                .set(&row)
                .returning(CreditCardDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?
                .map(CreditCard::from)
                .ok_or_else(|| Error::not_found("Card", row.id.clone()))
            })
            .await
    }

    async fn delete_card(&self, user_id: &str, card_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let card_id = card_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    credit_cards::table
                        .filter(credit_cards::id.eq(card_id))
                        .filter(credit_cards::user_id.eq(user_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_user, setup_db, ts};

    #[tokio::test]
    async fn crud_round_trip() {
        let db = setup_db();
        seed_user(&db, "u1").await;
        let repo = CardRepository::new(db.pool.clone(), db.writer.clone());

        let card = repo
            .insert_card(CreditCard {
                id: "c1".to_string(),
                user_id: "u1".to_string(),
                name: "Visa".to_string(),
                credit_limit: 5000.0,
                used_limit: 1200.0,
                statement_due_day: Some(10),
                best_purchase_day: Some(2),
                is_active: true,
                created_at: ts(1),
                updated_at: ts(1),
            })
            .await
            .unwrap();

        let deactivated = repo
            .update_card(CreditCard {
                is_active: false,
                best_purchase_day: None,
                ..card
            })
            .await
            .unwrap();
        assert!(!deactivated.is_active);
        assert_eq!(deactivated.best_purchase_day, None);
        assert_eq!(repo.get_card("u1", "c1").unwrap(), deactivated);

        assert_eq!(repo.delete_card("u1", "c1").await.unwrap(), 1);
        assert!(repo.list_cards("u1").unwrap().is_empty());
    }
}
