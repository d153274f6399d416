use serde::{Deserialize, Serialize};

use crate::bills::{Bill, BillStatus};
use crate::cards::CreditCard;
use crate::debts::Debt;
use crate::dreams::{Dream, DreamStatus};
use crate::income::IncomeEntry;
use crate::investments::Investment;
use crate::utils::YearMonth;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub period: Option<YearMonth>,
    pub total_income: f64,
    pub total_pending_bills: f64,
    pub total_debt: f64,
    pub total_invested: f64,
    pub active_cards: usize,
    pub active_dreams: usize,
}

/// Everything a user has recorded, as loaded for one summary.
#[derive(Debug, Clone, Default)]
pub struct SummaryInputs {
    pub income: Vec<IncomeEntry>,
    pub bills: Vec<Bill>,
    pub debts: Vec<Debt>,
    pub investments: Vec<Investment>,
    pub cards: Vec<CreditCard>,
    pub dreams: Vec<Dream>,
}

pub fn compute_summary(period: YearMonth, inputs: &SummaryInputs) -> FinancialSummary {
    FinancialSummary {
        period: Some(period),
        total_income: inputs
            .income
            .iter()
            .filter(|e| e.counts_in(period))
            .map(|e| e.amount)
            .sum(),
        total_pending_bills: inputs
            .bills
            .iter()
            .filter(|b| b.status == BillStatus::Pending)
            .map(|b| b.amount)
            .sum(),
        total_debt: inputs
            .debts
            .iter()
            .filter(|d| d.is_active())
            .map(|d| d.remaining_amount)
            .sum(),
        total_invested: inputs
            .investments
            .iter()
            .map(Investment::effective_value)
            .sum(),
        active_cards: inputs.cards.iter().filter(|c| c.is_active).count(),
        active_dreams: inputs
            .dreams
            .iter()
            .filter(|d| d.status == DreamStatus::Active)
            .count(),
    }
}
