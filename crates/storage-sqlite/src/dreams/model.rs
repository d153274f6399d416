//! Database models for dreams.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use finboard_core::dreams::{Dream, DreamContribution};
use finboard_core::Error;

use crate::errors::parse_column;

#[derive(
    Queryable, Insertable, AsChangeset, Selectable, Identifiable, Debug, Clone, PartialEq,
)]
#[diesel(table_name = crate::schema::dreams)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct DreamDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: f64,
    pub saved_amount: f64,
    pub monthly_contribution: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub priority: String,
    pub status: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Queryable, Insertable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(DreamDB, foreign_key = dream_id))]
#[diesel(table_name = crate::schema::dream_contributions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DreamContributionDB {
    pub id: String,
    pub dream_id: String,
    pub amount: f64,
    pub contributed_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<DreamDB> for Dream {
    type Error = Error;

    fn try_from(db: DreamDB) -> Result<Self, Self::Error> {
        Ok(Self {
            priority: parse_column("dreams.priority", &db.priority)?,
            status: parse_column("dreams.status", &db.status)?,
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            description: db.description,
            target_amount: db.target_amount,
            saved_amount: db.saved_amount,
            monthly_contribution: db.monthly_contribution,
            target_date: db.target_date,
            category: db.category,
            image_url: db.image_url,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Dream> for DreamDB {
    fn from(domain: Dream) -> Self {
        Self {
            priority: domain.priority.as_str().to_string(),
            status: domain.status.as_str().to_string(),
            id: domain.id,
            user_id: domain.user_id,
            title: domain.title,
            description: domain.description,
            target_amount: domain.target_amount,
            saved_amount: domain.saved_amount,
            monthly_contribution: domain.monthly_contribution,
            target_date: domain.target_date,
            category: domain.category,
            image_url: domain.image_url,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl From<DreamContributionDB> for DreamContribution {
    fn from(db: DreamContributionDB) -> Self {
        Self {
            id: db.id,
            dream_id: db.dream_id,
            amount: db.amount,
            contributed_on: db.contributed_on,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl From<DreamContribution> for DreamContributionDB {
    fn from(domain: DreamContribution) -> Self {
        Self {
            id: domain.id,
            dream_id: domain.dream_id,
            amount: domain.amount,
            contributed_on: domain.contributed_on,
            notes: domain.notes,
            created_at: domain.created_at,
        }
    }
}
