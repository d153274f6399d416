use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use finboard_core::subscription::{Subscriber, SubscriberRepositoryTrait};
use finboard_core::Result;

use super::model::{SubscriberChangesDB, SubscriberDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::subscribers;

pub struct SubscriberRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SubscriberRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SubscriberRepository { pool, writer }
    }
}

#[async_trait]
impl SubscriberRepositoryTrait for SubscriberRepository {
    fn get_by_email(&self, email: &str) -> Result<Option<Subscriber>> {
        let mut conn = get_connection(&self.pool)?;
        let row = subscribers::table
            .filter(subscribers::email.eq(email))
            .select(SubscriberDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(Subscriber::from))
    }

    async fn upsert_subscriber(&self, subscriber: Subscriber) -> Result<Subscriber> {
        let row = SubscriberDB::from(subscriber);
        let changes = SubscriberChangesDB::from(&row);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Subscriber> {
                let stored = diesel::insert_into(subscribers::table)
                    .values(&row)
                    .on_conflict(subscribers::email)
                    .do_update()
                    .set(&changes)
                    .returning(SubscriberDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Subscriber::from(stored))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_user, setup_db, ts};

    fn subscriber(id: &str, subscribed: bool, day: u32) -> Subscriber {
        Subscriber {
            id: id.to_string(),
            user_id: Some("u1".to_string()),
            email: "u1@example.com".to_string(),
            external_customer_id: Some("cus_1".to_string()),
            external_payment_id: None,
            subscribed,
            subscription_tier: subscribed.then(|| "Premium".to_string()),
            subscription_end: subscribed.then(|| ts(28)),
            created_at: ts(day),
            updated_at: ts(day),
        }
    }

    #[tokio::test]
    async fn upsert_by_email_keeps_id_and_creation_time() {
        let db = setup_db();
        seed_user(&db, "u1").await;
        let repo = SubscriberRepository::new(db.pool.clone(), db.writer.clone());

        let first = repo.upsert_subscriber(subscriber("s1", true, 1)).await.unwrap();
        assert!(first.subscribed);

        let mut lapsed = subscriber("s2", false, 5);
        lapsed.external_customer_id = None;
        let second = repo.upsert_subscriber(lapsed).await.unwrap();
        assert_eq!(second.id, "s1");
        assert_eq!(second.created_at, ts(1));
        assert_eq!(second.updated_at, ts(5));
        assert!(!second.subscribed);
        assert_eq!(second.subscription_tier, None);
        assert_eq!(second.external_customer_id, None);

        let stored = repo.get_by_email("u1@example.com").unwrap().unwrap();
        assert_eq!(stored, second);
        assert!(repo.get_by_email("nobody@example.com").unwrap().is_none());
    }
}
