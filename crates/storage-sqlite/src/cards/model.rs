//! Database models for credit cards.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finboard_core::cards::CreditCard;

#[derive(
    Queryable, Insertable, AsChangeset, Selectable, Identifiable, Debug, Clone, PartialEq,
)]
#[diesel(table_name = crate::schema::credit_cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct CreditCardDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub credit_limit: f64,
    pub used_limit: f64,
    pub statement_due_day: Option<i32>,
    pub best_purchase_day: Option<i32>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CreditCardDB> for CreditCard {
    fn from(db: CreditCardDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            credit_limit: db.credit_limit,
            used_limit: db.used_limit,
            statement_due_day: db.statement_due_day,
            best_purchase_day: db.best_purchase_day,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<CreditCard> for CreditCardDB {
    fn from(domain: CreditCard) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            credit_limit: domain.credit_limit,
            used_limit: domain.used_limit,
            statement_due_day: domain.statement_due_day,
            best_purchase_day: domain.best_purchase_day,
            is_active: domain.is_active,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
