use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::investments_model::{Investment, InvestmentsOverview, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use super::projection::{project_investments, InvestmentProjection};
use crate::errors::{Error, Result};

/// Longest horizon accepted for projections.
const MAX_PROJECTION_YEARS: u32 = 100;

pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        InvestmentService { repository }
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
        self.repository.list_investments(user_id)
    }

    fn get_overview(&self, user_id: &str) -> Result<InvestmentsOverview> {
        let investments = self.repository.list_investments(user_id)?;
        Ok(InvestmentsOverview::from_investments(&investments))
    }

    fn get_projection(&self, user_id: &str, years: u32) -> Result<Vec<InvestmentProjection>> {
        if years > MAX_PROJECTION_YEARS {
            return Err(Error::invalid_input(format!(
                "years must be at most {}",
                MAX_PROJECTION_YEARS
            )));
        }
        let investments = self.repository.list_investments(user_id)?;
        Ok(project_investments(&investments, years))
    }

    async fn create_investment(&self, user_id: &str, input: NewInvestment) -> Result<Investment> {
        input.validate()?;
        let now = Utc::now().naive_utc();
        let investment = Investment {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: input.name.trim().to_string(),
            kind: input.kind,
            invested_amount: input.invested_amount,
            current_value: input.current_value,
            invested_on: input.invested_on,
            maturity_date: input.maturity_date,
            expected_return: input.expected_return,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_investment(investment).await
    }

    async fn update_investment(
        &self,
        user_id: &str,
        investment_id: &str,
        changes: NewInvestment,
    ) -> Result<Investment> {
        changes.validate()?;
        let existing = self.repository.get_investment(user_id, investment_id)?;
        let investment = Investment {
            name: changes.name.trim().to_string(),
            kind: changes.kind,
            invested_amount: changes.invested_amount,
            current_value: changes.current_value,
            invested_on: changes.invested_on,
            maturity_date: changes.maturity_date,
            expected_return: changes.expected_return,
            notes: changes.notes,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        self.repository.update_investment(investment).await
    }

    async fn delete_investment(&self, user_id: &str, investment_id: &str) -> Result<()> {
        match self
            .repository
            .delete_investment(user_id, investment_id)
            .await?
        {
            0 => Err(Error::not_found("Investment", investment_id)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investments::InvestmentKind;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockInvestmentRepository {
        investments: Mutex<Vec<Investment>>,
    }

    #[async_trait]
    impl InvestmentRepositoryTrait for MockInvestmentRepository {
        fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
            Ok(self
                .investments
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_investment(&self, user_id: &str, investment_id: &str) -> Result<Investment> {
            self.investments
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.user_id == user_id && i.id == investment_id)
                .cloned()
                .ok_or_else(|| Error::not_found("Investment", investment_id))
        }

        async fn insert_investment(&self, investment: Investment) -> Result<Investment> {
            self.investments.lock().unwrap().push(investment.clone());
            Ok(investment)
        }

        async fn update_investment(&self, investment: Investment) -> Result<Investment> {
            let mut investments = self.investments.lock().unwrap();
            let slot = investments
                .iter_mut()
                .find(|i| i.id == investment.id)
                .ok_or_else(|| Error::not_found("Investment", investment.id.clone()))?;
            *slot = investment.clone();
            Ok(investment)
        }

        async fn delete_investment(&self, user_id: &str, investment_id: &str) -> Result<usize> {
            let mut investments = self.investments.lock().unwrap();
            let before = investments.len();
            investments.retain(|i| !(i.user_id == user_id && i.id == investment_id));
            Ok(before - investments.len())
        }
    }

    fn holding(
        name: &str,
        kind: InvestmentKind,
        invested: f64,
        current: Option<f64>,
        rate: Option<f64>,
    ) -> NewInvestment {
        NewInvestment {
            name: name.to_string(),
            kind,
            invested_amount: invested,
            current_value: current,
            invested_on: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            maturity_date: None,
            expected_return: rate,
            notes: None,
        }
    }

    fn service() -> InvestmentService {
        InvestmentService::new(Arc::new(MockInvestmentRepository::default()))
    }

    #[tokio::test]
    async fn overview_prefers_current_value_even_when_zero() {
        let service = service();
        service
            .create_investment(
                "u1",
                holding("CDB", InvestmentKind::FixedIncome, 1000.0, Some(1100.0), Some(10.0)),
            )
            .await
            .unwrap();
        service
            .create_investment("u1", holding("Coin", InvestmentKind::Crypto, 500.0, Some(0.0), None))
            .await
            .unwrap();
        service
            .create_investment("u1", holding("ETF", InvestmentKind::Funds, 300.0, None, Some(5.0)))
            .await
            .unwrap();

        let overview = service.get_overview("u1").unwrap();
        assert_eq!(overview.total_invested, 1800.0);
        assert_eq!(overview.total_current, 1400.0);
        // (1100 * 10 + 300 * 5) / 1400
        assert!((overview.weighted_expected_return - 12500.0 / 1400.0).abs() < 1e-9);

        let kinds: Vec<InvestmentKind> = overview.allocation.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InvestmentKind::FixedIncome,
                InvestmentKind::Funds,
                InvestmentKind::Crypto
            ]
        );
        assert_eq!(overview.allocation[2].amount, 0.0);
    }

    #[tokio::test]
    async fn projection_uses_effective_value_and_missing_rate_as_zero() {
        let service = service();
        service
            .create_investment(
                "u1",
                holding("CDB", InvestmentKind::FixedIncome, 1000.0, None, Some(10.0)),
            )
            .await
            .unwrap();
        service
            .create_investment("u1", holding("Cash", InvestmentKind::Funds, 200.0, None, None))
            .await
            .unwrap();

        let projections = service.get_projection("u1", 2).unwrap();
        assert_eq!(projections.len(), 2);
        let cdb = projections.iter().find(|p| p.name == "CDB").unwrap();
        assert!((cdb.projected_value - 1210.0).abs() < 1e-9);
        let cash = projections.iter().find(|p| p.name == "Cash").unwrap();
        assert_eq!(cash.projected_value, 200.0);

        assert!(service.get_projection("u1", 500).is_err());
    }

    #[tokio::test]
    async fn rejects_maturity_before_investment_date() {
        let mut input = holding("CDB", InvestmentKind::FixedIncome, 10.0, None, None);
        input.maturity_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert!(service().create_investment("u1", input).await.is_err());
    }

    #[test]
    fn kind_parses_from_storage_string() {
        assert_eq!(
            "fixed_income".parse::<InvestmentKind>().unwrap(),
            InvestmentKind::FixedIncome
        );
        assert!("bonds".parse::<InvestmentKind>().is_err());
    }
}
