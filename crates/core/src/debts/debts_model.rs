//! Debt domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::HIGH_RISK_INTEREST_RATE;
use crate::errors::{Error, Result};
use crate::utils::validation::{ensure_amount, ensure_not_blank, ensure_optional_amount};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    #[default]
    Active,
    PaidOff,
}

impl DebtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtStatus::Active => "active",
            DebtStatus::PaidOff => "paid_off",
        }
    }
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebtStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(DebtStatus::Active),
            "paid_off" => Ok(DebtStatus::PaidOff),
            other => Err(Error::invalid_input(format!("Unknown debt status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub user_id: String,
    pub creditor: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    /// Always `max(total_amount - paid_amount, 0)`.
    pub remaining_amount: f64,
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    /// Monthly interest rate, in percent.
    pub interest_rate: Option<f64>,
    pub status: DebtStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Debt {
    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }

    pub fn rate_or_zero(&self) -> f64 {
        self.interest_rate.unwrap_or(0.0)
    }
}

/// Editable fields of a debt. The remaining balance is always derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebt {
    pub creditor: String,
    pub total_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    pub start_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub interest_rate: Option<f64>,
    #[serde(default)]
    pub status: DebtStatus,
    pub notes: Option<String>,
}

impl NewDebt {
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("creditor", &self.creditor)?;
        ensure_amount("totalAmount", self.total_amount)?;
        ensure_amount("paidAmount", self.paid_amount)?;
        ensure_optional_amount("interestRate", self.interest_rate)?;
        Ok(())
    }

    pub fn remaining_amount(&self) -> f64 {
        (self.total_amount - self.paid_amount).max(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtsOverview {
    pub total_remaining: f64,
    pub average_interest_rate: f64,
    pub high_risk_count: usize,
    pub active_count: usize,
}

impl DebtsOverview {
    /// Summarises active debts. Debts without a rate count as 0% in the average.
    pub fn from_debts(debts: &[Debt]) -> Self {
        let active: Vec<&Debt> = debts.iter().filter(|d| d.is_active()).collect();
        if active.is_empty() {
            return DebtsOverview::default();
        }
        let total_rate: f64 = active.iter().map(|d| d.rate_or_zero()).sum();
        DebtsOverview {
            total_remaining: active.iter().map(|d| d.remaining_amount).sum(),
            average_interest_rate: total_rate / active.len() as f64,
            high_risk_count: active
                .iter()
                .filter(|d| d.rate_or_zero() > HIGH_RISK_INTEREST_RATE)
                .count(),
            active_count: active.len(),
        }
    }
}
