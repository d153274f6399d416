//! Database models for bills.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use finboard_core::bills::Bill;
use finboard_core::Error;

use crate::errors::parse_column;

#[derive(
    Queryable, Insertable, AsChangeset, Selectable, Identifiable, Debug, Clone, PartialEq,
)]
#[diesel(table_name = crate::schema::bills)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct BillDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    pub due_day: i32,
    pub category_id: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<BillDB> for Bill {
    type Error = Error;

    fn try_from(db: BillDB) -> Result<Self, Self::Error> {
        Ok(Self {
            status: parse_column("bills.status", &db.status)?,
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            amount: db.amount,
            due_day: db.due_day,
            category_id: db.category_id,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Bill> for BillDB {
    fn from(domain: Bill) -> Self {
        Self {
            status: domain.status.as_str().to_string(),
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            amount: domain.amount,
            due_day: domain.due_day,
            category_id: domain.category_id,
            notes: domain.notes,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
