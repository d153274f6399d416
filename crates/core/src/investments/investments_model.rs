//! Investment domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::validation::{ensure_amount, ensure_not_blank, ensure_optional_amount};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    FixedIncome,
    Stocks,
    Funds,
    Crypto,
}

impl InvestmentKind {
    pub const ALL: [InvestmentKind; 4] = [
        InvestmentKind::FixedIncome,
        InvestmentKind::Stocks,
        InvestmentKind::Funds,
        InvestmentKind::Crypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentKind::FixedIncome => "fixed_income",
            InvestmentKind::Stocks => "stocks",
            InvestmentKind::Funds => "funds",
            InvestmentKind::Crypto => "crypto",
        }
    }
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        InvestmentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| Error::invalid_input(format!("Unknown investment kind '{}'", s)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: InvestmentKind,
    pub invested_amount: f64,
    pub current_value: Option<f64>,
    pub invested_on: NaiveDate,
    pub maturity_date: Option<NaiveDate>,
    /// Expected annual return, in percent.
    pub expected_return: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Investment {
    /// The marked value when one was recorded (even zero), otherwise the cost basis.
    pub fn effective_value(&self) -> f64 {
        self.current_value.unwrap_or(self.invested_amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub name: String,
    pub kind: InvestmentKind,
    pub invested_amount: f64,
    pub current_value: Option<f64>,
    pub invested_on: NaiveDate,
    pub maturity_date: Option<NaiveDate>,
    pub expected_return: Option<f64>,
    pub notes: Option<String>,
}

impl NewInvestment {
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("name", &self.name)?;
        ensure_amount("investedAmount", self.invested_amount)?;
        ensure_optional_amount("currentValue", self.current_value)?;
        if let Some(rate) = self.expected_return {
            if !rate.is_finite() {
                return Err(Error::invalid_input("expectedReturn must be a number"));
            }
        }
        if let Some(maturity) = self.maturity_date {
            if maturity < self.invested_on {
                return Err(Error::invalid_input(
                    "maturityDate cannot be before investedOn",
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub kind: InvestmentKind,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentsOverview {
    pub total_invested: f64,
    pub total_current: f64,
    /// Expected return weighted by each holding's current value.
    pub weighted_expected_return: f64,
    pub allocation: Vec<AllocationSlice>,
}

impl InvestmentsOverview {
    pub fn from_investments(investments: &[Investment]) -> Self {
        let total_invested: f64 = investments.iter().map(|i| i.invested_amount).sum();
        let total_current: f64 = investments.iter().map(Investment::effective_value).sum();
        let weighted_expected_return = if total_current > 0.0 {
            investments
                .iter()
                .map(|i| i.effective_value() * i.expected_return.unwrap_or(0.0))
                .sum::<f64>()
                / total_current
        } else {
            0.0
        };
        let allocation = InvestmentKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let mut holdings = investments.iter().filter(|i| i.kind == kind).peekable();
                holdings.peek()?;
                Some(AllocationSlice {
                    kind,
                    amount: holdings.map(Investment::effective_value).sum(),
                })
            })
            .collect();
        InvestmentsOverview {
            total_invested,
            total_current,
            weighted_expected_return,
            allocation,
        }
    }
}
