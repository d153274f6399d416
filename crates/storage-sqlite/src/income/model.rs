//! Database models for income entries.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use finboard_core::income::IncomeEntry;

#[derive(
    Queryable, Insertable, AsChangeset, Selectable, Identifiable, Debug, Clone, PartialEq,
)]
#[diesel(table_name = crate::schema::income_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct IncomeEntryDB {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub amount: f64,
    pub received_on: NaiveDate,
    pub category_id: Option<String>,
    pub is_recurring: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<IncomeEntryDB> for IncomeEntry {
    fn from(db: IncomeEntryDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            description: db.description,
            amount: db.amount,
            received_on: db.received_on,
            category_id: db.category_id,
            is_recurring: db.is_recurring,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<IncomeEntry> for IncomeEntryDB {
    fn from(domain: IncomeEntry) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            description: domain.description,
            amount: domain.amount,
            received_on: domain.received_on,
            category_id: domain.category_id,
            is_recurring: domain.is_recurring,
            notes: domain.notes,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
