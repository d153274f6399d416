//! Income domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::validation::{ensure_amount, ensure_not_blank};
use crate::utils::YearMonth;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
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

impl IncomeEntry {
    /// Recurring entries count every month; one-off entries only in the month received.
    pub fn counts_in(&self, period: YearMonth) -> bool {
        self.is_recurring || period.contains(self.received_on)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncomeEntry {
    pub description: String,
    pub amount: f64,
    pub received_on: NaiveDate,
    pub category_id: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    pub notes: Option<String>,
}

impl NewIncomeEntry {
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("description", &self.description)?;
        ensure_amount("amount", self.amount)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeOverview {
    pub period: Option<YearMonth>,
    pub monthly_total: f64,
    pub recurring_total: f64,
    pub one_off_total_this_month: f64,
}

impl IncomeOverview {
    pub fn for_period(entries: &[IncomeEntry], period: YearMonth) -> Self {
        let mut overview = IncomeOverview {
            period: Some(period),
            ..Default::default()
        };
        for entry in entries.iter().filter(|e| e.counts_in(period)) {
            overview.monthly_total += entry.amount;
            if entry.is_recurring {
                overview.recurring_total += entry.amount;
            } else {
                overview.one_off_total_this_month += entry.amount;
            }
        }
        overview
    }
}
