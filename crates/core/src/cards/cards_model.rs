//! Credit card domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::utils::validation::{ensure_amount, ensure_day_of_month, ensure_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
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

impl CreditCard {
    pub fn available_limit(&self) -> f64 {
        self.credit_limit - self.used_limit
    }
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditCard {
    pub name: String,
    pub credit_limit: f64,
    #[serde(default)]
    pub used_limit: f64,
    pub statement_due_day: Option<i32>,
    pub best_purchase_day: Option<i32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl NewCreditCard {
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("name", &self.name)?;
        ensure_amount("creditLimit", self.credit_limit)?;
        ensure_amount("usedLimit", self.used_limit)?;
        if let Some(day) = self.statement_due_day {
            ensure_day_of_month("statementDueDay", day)?;
        }
        if let Some(day) = self.best_purchase_day {
            ensure_day_of_month("bestPurchaseDay", day)?;
        }
        if self.used_limit > self.credit_limit {
            log::warn!(
                "Card '{}' uses {} of a {} limit",
                self.name,
                self.used_limit,
                self.credit_limit
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardsOverview {
    pub total_limit: f64,
    pub total_used: f64,
    pub available: f64,
    pub utilization_pct: f64,
    pub active_count: usize,
}

impl CardsOverview {
    /// Limits are summed over active cards only.
    pub fn from_cards(cards: &[CreditCard]) -> Self {
        let mut overview = CardsOverview::default();
        for card in cards.iter().filter(|c| c.is_active) {
            overview.total_limit += card.credit_limit;
            overview.total_used += card.used_limit;
            overview.active_count += 1;
        }
        overview.available = overview.total_limit - overview.total_used;
        overview.utilization_pct = if overview.total_limit > 0.0 {
            overview.total_used / overview.total_limit * 100.0
        } else {
            0.0
        };
        overview
    }
}

