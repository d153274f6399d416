//! Compound-growth projections for investments.

use serde::{Deserialize, Serialize};

use super::investments_model::Investment;

/// `principal * (1 + annual_rate_pct / 100) ^ years`.
pub fn future_value(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    principal * (1.0 + annual_rate_pct / 100.0).powi(years as i32)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentProjection {
    pub investment_id: String,
    pub name: String,
    pub years: u32,
    pub starting_value: f64,
    pub annual_rate: f64,
    pub projected_value: f64,
}

pub fn project_investments(investments: &[Investment], years: u32) -> Vec<InvestmentProjection> {
    investments
        .iter()
        .map(|investment| {
            let starting_value = investment.effective_value();
            let annual_rate = investment.expected_return.unwrap_or(0.0);
            InvestmentProjection {
                investment_id: investment.id.clone(),
                name: investment.name.clone(),
                years,
                starting_value,
                annual_rate,
                projected_value: future_value(starting_value, annual_rate, years),
            }
        })
        .collect()
}
