//! Database models for subscribers.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finboard_core::subscription::Subscriber;

#[derive(Queryable, Insertable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::subscribers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubscriberDB {
    pub id: String,
    pub user_id: Option<String>,
    pub email: String,
    pub external_customer_id: Option<String>,
    pub external_payment_id: Option<String>,
    pub subscribed: bool,
    pub subscription_tier: Option<String>,
    pub subscription_end: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Columns rewritten when an upsert hits an existing email.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::subscribers)]
#[diesel(treat_none_as_null = true)]
pub struct SubscriberChangesDB {
    pub user_id: Option<String>,
    pub external_customer_id: Option<String>,
    pub external_payment_id: Option<String>,
    pub subscribed: bool,
    pub subscription_tier: Option<String>,
    pub subscription_end: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

impl From<&SubscriberDB> for SubscriberChangesDB {
    fn from(row: &SubscriberDB) -> Self {
        Self {
            user_id: row.user_id.clone(),
            external_customer_id: row.external_customer_id.clone(),
            external_payment_id: row.external_payment_id.clone(),
            subscribed: row.subscribed,
            subscription_tier: row.subscription_tier.clone(),
            subscription_end: row.subscription_end,
            updated_at: row.updated_at,
        }
    }
}

impl From<SubscriberDB> for Subscriber {
    fn from(db: SubscriberDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            email: db.email,
            external_customer_id: db.external_customer_id,
            external_payment_id: db.external_payment_id,
            subscribed: db.subscribed,
            subscription_tier: db.subscription_tier,
            subscription_end: db.subscription_end,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Subscriber> for SubscriberDB {
    fn from(domain: Subscriber) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            email: domain.email,
            external_customer_id: domain.external_customer_id,
            external_payment_id: domain.external_payment_id,
            subscribed: domain.subscribed,
            subscription_tier: domain.subscription_tier,
            subscription_end: domain.subscription_end,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
