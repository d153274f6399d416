//! Debt payoff ordering and estimates.
//!
//! Interest rates on debts are monthly percentages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::debts_model::Debt;
use crate::errors::{Error, Result};
use crate::utils::whole_months;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PayoffStrategy {
    /// Smallest remaining balance first.
    Snowball,
    /// Highest interest rate first.
    Avalanche,
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffStrategy::Snowball => f.write_str("snowball"),
            PayoffStrategy::Avalanche => f.write_str("avalanche"),
        }
    }
}

impl FromStr for PayoffStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "snowball" => Ok(PayoffStrategy::Snowball),
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            other => Err(Error::invalid_input(format!(
                "Unknown payoff strategy '{}'",
                other
            ))),
        }
    }
}

/// Orders debts for repayment. The sort is stable, so ties keep their input order.
pub fn order_debts(mut debts: Vec<Debt>, strategy: PayoffStrategy) -> Vec<Debt> {
    match strategy {
        PayoffStrategy::Snowball => {
            debts.sort_by(|a, b| a.remaining_amount.total_cmp(&b.remaining_amount))
        }
        PayoffStrategy::Avalanche => {
            debts.sort_by(|a, b| b.rate_or_zero().total_cmp(&a.rate_or_zero()))
        }
    }
    debts
}

/// Whole months needed to clear `total_remaining` at `monthly_payment` per month,
/// ignoring interest. `None` when the payment cannot make progress or the count
/// does not fit in a `u64`.
pub fn payoff_months(total_remaining: f64, monthly_payment: f64) -> Option<u64> {
    if !monthly_payment.is_finite() || monthly_payment <= 0.0 {
        return None;
    }
    if total_remaining <= 0.0 {
        return Some(0);
    }
    whole_months(total_remaining / monthly_payment)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoffSimulation {
    pub monthly_payment: f64,
    pub total_remaining: f64,
    pub months_to_payoff: Option<u64>,
    /// Interest accrued on the current balances over the payoff period.
    pub estimated_interest: f64,
}

pub fn simulate_payoff(debts: &[Debt], monthly_payment: f64) -> PayoffSimulation {
    let total_remaining: f64 = debts.iter().map(|d| d.remaining_amount).sum();
    let months_to_payoff = payoff_months(total_remaining, monthly_payment);
    let monthly_interest: f64 = debts
        .iter()
        .map(|d| d.remaining_amount * d.rate_or_zero() / 100.0)
        .sum();
    PayoffSimulation {
        monthly_payment,
        total_remaining,
        months_to_payoff,
        estimated_interest: months_to_payoff
            .map(|m| monthly_interest * m as f64)
            .unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debts::DebtStatus;
    use chrono::NaiveDate;

    fn debt(id: &str, remaining: f64, rate: Option<f64>) -> Debt {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Debt {
            id: id.to_string(),
            user_id: "u1".to_string(),
            creditor: id.to_string(),
            total_amount: remaining,
            paid_amount: 0.0,
            remaining_amount: remaining,
            start_date: ts.date(),
            due_date: None,
            interest_rate: rate,
            status: DebtStatus::Active,
            notes: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn ids(debts: &[Debt]) -> Vec<&str> {
        debts.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn snowball_and_avalanche_disagree_on_two_debts() {
        let debts = vec![debt("a", 400.0, Some(10.0)), debt("b", 100.0, Some(5.0))];
        assert_eq!(
            ids(&order_debts(debts.clone(), PayoffStrategy::Snowball)),
            vec!["b", "a"]
        );
        assert_eq!(
            ids(&order_debts(debts, PayoffStrategy::Avalanche)),
            vec!["a", "b"]
        );
    }

    #[test]
    fn snowball_is_non_decreasing_by_balance() {
        let debts = vec![
            debt("a", 900.0, None),
            debt("b", 50.0, Some(2.0)),
            debt("c", 300.0, Some(1.0)),
            debt("d", 300.0, Some(9.0)),
        ];
        let ordered = order_debts(debts, PayoffStrategy::Snowball);
        assert!(ordered
            .windows(2)
            .all(|w| w[0].remaining_amount <= w[1].remaining_amount));
        // Equal balances keep their input order.
        assert_eq!(ids(&ordered), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn avalanche_treats_missing_rate_as_zero() {
        let debts = vec![
            debt("none", 10.0, None),
            debt("low", 20.0, Some(1.5)),
            debt("high", 30.0, Some(8.0)),
        ];
        let ordered = order_debts(debts, PayoffStrategy::Avalanche);
        assert_eq!(ids(&ordered), vec!["high", "low", "none"]);
        assert!(ordered
            .windows(2)
            .all(|w| w[0].rate_or_zero() >= w[1].rate_or_zero()));
    }

    #[test]
    fn payoff_months_rounds_up() {
        assert_eq!(payoff_months(1000.0, 300.0), Some(4));
        assert_eq!(payoff_months(900.0, 300.0), Some(3));
        assert_eq!(payoff_months(0.0, 300.0), Some(0));
        assert_eq!(payoff_months(1000.0, 0.0), None);
        assert_eq!(payoff_months(1000.0, -5.0), None);
        assert_eq!(payoff_months(1000.0, f64::NAN), None);
    }

    #[test]
    fn payoff_months_counts_beyond_u32() {
        assert_eq!(payoff_months(1.0e9, 0.01), Some(100_000_000_000));
        assert_eq!(payoff_months(f64::MAX, f64::MIN_POSITIVE), None);
        assert_eq!(payoff_months(f64::INFINITY, 10.0), None);
    }

    #[test]
    fn simulation_accrues_monthly_interest_over_the_payoff_period() {
        let debts = vec![debt("a", 400.0, Some(10.0)), debt("b", 100.0, Some(5.0))];
        let sim = simulate_payoff(&debts, 100.0);
        assert_eq!(sim.total_remaining, 500.0);
        assert_eq!(sim.months_to_payoff, Some(5));
        // (400 * 0.10 + 100 * 0.05) * 5
        assert!((sim.estimated_interest - 225.0).abs() < 1e-9);

        let stalled = simulate_payoff(&debts, 0.0);
        assert_eq!(stalled.months_to_payoff, None);
        assert_eq!(stalled.estimated_interest, 0.0);
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!(
            "Avalanche".parse::<PayoffStrategy>().unwrap(),
            PayoffStrategy::Avalanche
        );
        assert!("fastest".parse::<PayoffStrategy>().is_err());
    }
}
