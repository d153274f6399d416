//! Bill domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::validation::{ensure_amount, ensure_day_of_month, ensure_not_blank};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    Paid,
    #[default]
    Pending,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Paid => "paid",
            BillStatus::Pending => "pending",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BillStatus::Paid => BillStatus::Pending,
            BillStatus::Pending => BillStatus::Paid,
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "paid" => Ok(BillStatus::Paid),
            "pending" => Ok(BillStatus::Pending),
            other => Err(Error::invalid_input(format!("Unknown bill status '{}'", other))),
        }
    }
}

/// A fixed bill that recurs every month on `due_day`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    pub due_day: i32,
    pub category_id: Option<String>,
    pub status: BillStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Editable fields of a bill, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub name: String,
    pub amount: f64,
    pub due_day: i32,
    pub category_id: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
    pub notes: Option<String>,
}

impl NewBill {
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("name", &self.name)?;
        ensure_amount("amount", self.amount)?;
        ensure_day_of_month("dueDay", self.due_day)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillsOverview {
    pub total: f64,
    pub pending_total: f64,
    pub paid_total: f64,
    pub pending_count: usize,
    pub paid_count: usize,
}

impl BillsOverview {
    pub fn from_bills(bills: &[Bill]) -> Self {
        bills.iter().fold(BillsOverview::default(), |mut acc, bill| {
            acc.total += bill.amount;
            match bill.status {
                BillStatus::Paid => {
                    acc.paid_total += bill.amount;
                    acc.paid_count += 1;
                }
                BillStatus::Pending => {
                    acc.pending_total += bill.amount;
                    acc.pending_count += 1;
                }
            }
            acc
        })
    }
}
