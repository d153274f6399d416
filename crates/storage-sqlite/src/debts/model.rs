//! Database models for debts.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use finboard_core::debts::Debt;
use finboard_core::Error;

use crate::errors::parse_column;

#[derive(
    Queryable, Insertable, AsChangeset, Selectable, Identifiable, Debug, Clone, PartialEq,
)]
#[diesel(table_name = crate::schema::debts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct DebtDB {
    pub id: String,
    pub user_id: String,
    pub creditor: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub remaining_amount: f64,
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub interest_rate: Option<f64>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<DebtDB> for Debt {
    type Error = Error;

    fn try_from(db: DebtDB) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_column("debts.status", &db.status)?,
            id: db.id,
            user_id: db.user_id,
            creditor: db.creditor,
            total_amount: db.total_amount,
            paid_amount: db.paid_amount,
            remaining_amount: db.remaining_amount,
            start_date: db.start_date,
            due_date: db.due_date,
            interest_rate: db.interest_rate,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Debt> for DebtDB {
    fn from(domain: Debt) -> Self {
        Self {
            status: domain.status.as_str().to_string(),
            id: domain.id,
            user_id: domain.user_id,
            creditor: domain.creditor,
            total_amount: domain.total_amount,
            paid_amount: domain.paid_amount,
            remaining_amount: domain.remaining_amount,
            start_date: domain.start_date,
            due_date: domain.due_date,
            interest_rate: domain.interest_rate,
            notes: domain.notes,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
