//! Dream board domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::validation::{ensure_amount, ensure_not_blank, ensure_optional_amount};
use crate::utils::whole_months;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DreamPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl DreamPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            DreamPriority::Low => "low",
            DreamPriority::Medium => "medium",
            DreamPriority::High => "high",
        }
    }
}

impl FromStr for DreamPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(DreamPriority::Low),
            "medium" => Ok(DreamPriority::Medium),
            "high" => Ok(DreamPriority::High),
            other => Err(Error::invalid_input(format!("Unknown priority '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DreamStatus {
    #[default]
    Active,
    Achieved,
    Paused,
}

impl DreamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DreamStatus::Active => "active",
            DreamStatus::Achieved => "achieved",
            DreamStatus::Paused => "paused",
        }
    }
}

impl fmt::Display for DreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DreamStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(DreamStatus::Active),
            "achieved" => Ok(DreamStatus::Achieved),
            "paused" => Ok(DreamStatus::Paused),
            other => Err(Error::invalid_input(format!("Unknown dream status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dream {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: f64,
    pub saved_amount: f64,
    pub monthly_contribution: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub priority: DreamPriority,
    pub status: DreamStatus,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Dream {
    pub fn progress(&self) -> DreamProgress {
        let progress_pct = if self.target_amount > 0.0 {
            (self.saved_amount / self.target_amount * 100.0).min(100.0)
        } else {
            100.0
        };
        DreamProgress {
            dream_id: self.id.clone(),
            progress_pct,
            remaining: (self.target_amount - self.saved_amount).max(0.0),
            months_to_goal: months_to_goal(
                self.target_amount,
                self.saved_amount,
                self.monthly_contribution.unwrap_or(0.0),
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDream {
    pub title: String,
    pub description: Option<String>,
    pub target_amount: f64,
    #[serde(default)]
    pub saved_amount: f64,
    pub monthly_contribution: Option<f64>,
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: DreamPriority,
    #[serde(default)]
    pub status: DreamStatus,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl NewDream {
    pub fn validate(&self) -> Result<()> {
        ensure_not_blank("title", &self.title)?;
        ensure_amount("targetAmount", self.target_amount)?;
        ensure_amount("savedAmount", self.saved_amount)?;
        ensure_optional_amount("monthlyContribution", self.monthly_contribution)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DreamContribution {
    pub id: String,
    pub dream_id: String,
    pub amount: f64,
    pub contributed_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDreamContribution {
    pub amount: f64,
    /// Defaults to today when omitted.
    pub contributed_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl NewDreamContribution {
    pub fn validate(&self) -> Result<()> {
        ensure_amount("amount", self.amount)?;
        if self.amount == 0.0 {
            return Err(Error::invalid_input("Contribution amount must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DreamProgress {
    pub dream_id: String,
    pub progress_pct: f64,
    pub remaining: f64,
    pub months_to_goal: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DreamsOverview {
    pub total_target: f64,
    pub total_saved: f64,
    pub total_monthly: f64,
    pub overall_progress_pct: f64,
    pub active_count: usize,
    pub achieved_count: usize,
    pub progress: Vec<DreamProgress>,
}

impl DreamsOverview {
    pub fn from_dreams(dreams: &[Dream]) -> Self {
        let total_target: f64 = dreams.iter().map(|d| d.target_amount).sum();
        let total_saved: f64 = dreams.iter().map(|d| d.saved_amount).sum();
        DreamsOverview {
            total_target,
            total_saved,
            total_monthly: dreams
                .iter()
                .filter(|d| d.status == DreamStatus::Active)
                .filter_map(|d| d.monthly_contribution)
                .sum(),
            overall_progress_pct: if total_target > 0.0 {
                total_saved / total_target * 100.0
            } else {
                0.0
            },
            active_count: dreams
                .iter()
                .filter(|d| d.status == DreamStatus::Active)
                .count(),
            achieved_count: dreams
                .iter()
                .filter(|d| d.status == DreamStatus::Achieved)
                .count(),
            progress: dreams.iter().map(Dream::progress).collect(),
        }
    }
}

/// Months of `monthly` contributions needed to close the gap to `target`.
/// `None` when nothing is being contributed or the goal is out of reach.
pub fn months_to_goal(target: f64, saved: f64, monthly: f64) -> Option<u64> {
    if !monthly.is_finite() || monthly <= 0.0 {
        return None;
    }
    let gap = (target - saved).max(0.0);
    whole_months(gap / monthly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_to_goal_rounds_up_and_clamps() {
        assert_eq!(months_to_goal(10000.0, 2500.0, 1000.0), Some(8));
        assert_eq!(months_to_goal(10000.0, 12000.0, 1000.0), Some(0));
        assert_eq!(months_to_goal(10000.0, 0.0, 0.0), None);
        assert_eq!(months_to_goal(10000.0, 0.0, -10.0), None);
    }

    #[test]
    fn months_to_goal_does_not_saturate() {
        assert_eq!(months_to_goal(1.0e10, 0.0, 0.01), Some(1_000_000_000_000));
        assert_eq!(months_to_goal(f64::MAX, 0.0, f64::MIN_POSITIVE), None);
    }
}
