use std::sync::Arc;

use log::debug;

use super::summary_model::{compute_summary, FinancialSummary, SummaryInputs};
use crate::bills::BillRepositoryTrait;
use crate::cards::CardRepositoryTrait;
use crate::debts::DebtRepositoryTrait;
use crate::dreams::DreamRepositoryTrait;
use crate::errors::Result;
use crate::income::IncomeRepositoryTrait;
use crate::investments::InvestmentRepositoryTrait;
use crate::utils::YearMonth;

/// Trait for summary service operations
pub trait SummaryServiceTrait: Send + Sync {
    fn get_summary(&self, user_id: &str, period: YearMonth) -> Result<FinancialSummary>;
}

pub struct SummaryService {
    income: Arc<dyn IncomeRepositoryTrait>,
    bills: Arc<dyn BillRepositoryTrait>,
    debts: Arc<dyn DebtRepositoryTrait>,
    investments: Arc<dyn InvestmentRepositoryTrait>,
    cards: Arc<dyn CardRepositoryTrait>,
    dreams: Arc<dyn DreamRepositoryTrait>,
}

impl SummaryService {
    pub fn new(
        income: Arc<dyn IncomeRepositoryTrait>,
        bills: Arc<dyn BillRepositoryTrait>,
        debts: Arc<dyn DebtRepositoryTrait>,
        investments: Arc<dyn InvestmentRepositoryTrait>,
        cards: Arc<dyn CardRepositoryTrait>,
        dreams: Arc<dyn DreamRepositoryTrait>,
    ) -> Self {
        SummaryService {
            income,
            bills,
            debts,
            investments,
            cards,
            dreams,
        }
    }
}

impl SummaryServiceTrait for SummaryService {
    fn get_summary(&self, user_id: &str, period: YearMonth) -> Result<FinancialSummary> {
        debug!("Computing summary for {} in {}", user_id, period);
        let inputs = SummaryInputs {
            income: self.income.list_income(user_id)?,
            bills: self.bills.list_bills(user_id)?,
            debts: self.debts.list_debts(user_id)?,
            investments: self.investments.list_investments(user_id)?,
            cards: self.cards.list_cards(user_id)?,
            dreams: self.dreams.list_dreams(user_id)?,
        };
        Ok(compute_summary(period, &inputs))
    }
}
