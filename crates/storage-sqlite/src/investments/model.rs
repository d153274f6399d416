//! Database models for investments.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use finboard_core::investments::Investment;
use finboard_core::Error;

use crate::errors::parse_column;

#[derive(
    Queryable, Insertable, AsChangeset, Selectable, Identifiable, Debug, Clone, PartialEq,
)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct InvestmentDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: String,
    pub invested_amount: f64,
    pub current_value: Option<f64>,
    pub invested_on: NaiveDate,
    pub maturity_date: Option<NaiveDate>,
    pub expected_return: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<InvestmentDB> for Investment {
    type Error = Error;

    fn try_from(db: InvestmentDB) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: parse_column("investments.kind", &db.kind)?,
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            invested_amount: db.invested_amount,
            current_value: db.current_value,
            invested_on: db.invested_on,
            maturity_date: db.maturity_date,
            expected_return: db.expected_return,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Investment> for InvestmentDB {
    fn from(domain: Investment) -> Self {
        Self {
            kind: domain.kind.as_str().to_string(),
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            invested_amount: domain.invested_amount,
            current_value: domain.current_value,
            invested_on: domain.invested_on,
            maturity_date: domain.maturity_date,
            expected_return: domain.expected_return,
            notes: domain.notes,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
