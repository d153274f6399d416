use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::debts_model::{Debt, DebtsOverview, NewDebt};
use super::debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
use super::strategy::{self, PayoffSimulation, PayoffStrategy};
use crate::errors::{Error, Result};

pub struct DebtService {
    repository: Arc<dyn DebtRepositoryTrait>,
}

impl DebtService {
    pub fn new(repository: Arc<dyn DebtRepositoryTrait>) -> Self {
        DebtService { repository }
    }

    fn active_debts(&self, user_id: &str) -> Result<Vec<Debt>> {
        Ok(self
            .repository
            .list_debts(user_id)?
            .into_iter()
            .filter(Debt::is_active)
            .collect())
    }
}

#[async_trait]
impl DebtServiceTrait for DebtService {
    fn list_debts(&self, user_id: &str) -> Result<Vec<Debt>> {
        self.repository.list_debts(user_id)
    }

    fn get_overview(&self, user_id: &str) -> Result<DebtsOverview> {
        let debts = self.repository.list_debts(user_id)?;
        Ok(DebtsOverview::from_debts(&debts))
    }

    fn get_strategy(&self, user_id: &str, strategy: PayoffStrategy) -> Result<Vec<Debt>> {
        Ok(strategy::order_debts(self.active_debts(user_id)?, strategy))
    }

    fn simulate_payoff(&self, user_id: &str, monthly_payment: f64) -> Result<PayoffSimulation> {
        if !monthly_payment.is_finite() {
            return Err(Error::invalid_input("monthlyPayment must be a number"));
        }
        Ok(strategy::simulate_payoff(
            &self.active_debts(user_id)?,
            monthly_payment,
        ))
    }

    async fn create_debt(&self, user_id: &str, input: NewDebt) -> Result<Debt> {
        input.validate()?;
        let now = Utc::now().naive_utc();
        let debt = Debt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            creditor: input.creditor.trim().to_string(),
            total_amount: input.total_amount,
            paid_amount: input.paid_amount,
            remaining_amount: input.remaining_amount(),
            start_date: input.start_date,
            due_date: input.due_date,
            interest_rate: input.interest_rate,
            status: input.status,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_debt(debt).await
    }

    async fn update_debt(&self, user_id: &str, debt_id: &str, changes: NewDebt) -> Result<Debt> {
        changes.validate()?;
        let existing = self.repository.get_debt(user_id, debt_id)?;
        let debt = Debt {
            creditor: changes.creditor.trim().to_string(),
            total_amount: changes.total_amount,
            paid_amount: changes.paid_amount,
            remaining_amount: changes.remaining_amount(),
            start_date: changes.start_date,
            due_date: changes.due_date,
            interest_rate: changes.interest_rate,
            status: changes.status,
            notes: changes.notes,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        self.repository.update_debt(debt).await
    }

    async fn delete_debt(&self, user_id: &str, debt_id: &str) -> Result<()> {
        match self.repository.delete_debt(user_id, debt_id).await? {
            0 => Err(Error::not_found("Debt", debt_id)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debts::DebtStatus;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockDebtRepository {
        debts: Mutex<Vec<Debt>>,
    }

    #[async_trait]
    impl DebtRepositoryTrait for MockDebtRepository {
        fn list_debts(&self, user_id: &str) -> Result<Vec<Debt>> {
            Ok(self
                .debts
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_debt(&self, user_id: &str, debt_id: &str) -> Result<Debt> {
            self.debts
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.user_id == user_id && d.id == debt_id)
                .cloned()
                .ok_or_else(|| Error::not_found("Debt", debt_id))
        }

        async fn insert_debt(&self, debt: Debt) -> Result<Debt> {
            self.debts.lock().unwrap().push(debt.clone());
            Ok(debt)
        }

        async fn update_debt(&self, debt: Debt) -> Result<Debt> {
            let mut debts = self.debts.lock().unwrap();
            let slot = debts
                .iter_mut()
                .find(|d| d.id == debt.id)
                .ok_or_else(|| Error::not_found("Debt", debt.id.clone()))?;
            *slot = debt.clone();
            Ok(debt)
        }

        async fn delete_debt(&self, user_id: &str, debt_id: &str) -> Result<usize> {
            let mut debts = self.debts.lock().unwrap();
            let before = debts.len();
            debts.retain(|d| !(d.user_id == user_id && d.id == debt_id));
            Ok(before - debts.len())
        }
    }

    fn new_debt(creditor: &str, total: f64, paid: f64, rate: Option<f64>) -> NewDebt {
        NewDebt {
            creditor: creditor.to_string(),
            total_amount: total,
            paid_amount: paid,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            due_date: None,
            interest_rate: rate,
            status: DebtStatus::Active,
            notes: None,
        }
    }

    fn service() -> DebtService {
        DebtService::new(Arc::new(MockDebtRepository::default()))
    }

    #[tokio::test]
    async fn remaining_amount_is_derived_and_never_negative() {
        let service = service();
        let debt = service
            .create_debt("u1", new_debt("Bank", 1000.0, 250.0, Some(2.0)))
            .await
            .unwrap();
        assert_eq!(debt.remaining_amount, 750.0);

        let overpaid = service
            .update_debt("u1", &debt.id, new_debt("Bank", 1000.0, 1200.0, Some(2.0)))
            .await
            .unwrap();
        assert_eq!(overpaid.remaining_amount, 0.0);
    }

    #[tokio::test]
    async fn strategy_and_payoff_skip_paid_off_debts() {
        let service = service();
        service
            .create_debt("u1", new_debt("Card", 400.0, 0.0, Some(10.0)))
            .await
            .unwrap();
        service
            .create_debt("u1", new_debt("Loan", 100.0, 0.0, Some(5.0)))
            .await
            .unwrap();
        let mut settled = new_debt("Old", 50.0, 0.0, Some(20.0));
        settled.status = DebtStatus::PaidOff;
        service.create_debt("u1", settled).await.unwrap();

        let snowball = service.get_strategy("u1", PayoffStrategy::Snowball).unwrap();
        let creditors: Vec<&str> = snowball.iter().map(|d| d.creditor.as_str()).collect();
        assert_eq!(creditors, vec!["Loan", "Card"]);

        let avalanche = service.get_strategy("u1", PayoffStrategy::Avalanche).unwrap();
        let creditors: Vec<&str> = avalanche.iter().map(|d| d.creditor.as_str()).collect();
        assert_eq!(creditors, vec!["Card", "Loan"]);

        let sim = service.simulate_payoff("u1", 150.0).unwrap();
        assert_eq!(sim.total_remaining, 500.0);
        assert_eq!(sim.months_to_payoff, Some(4));
    }

    #[tokio::test]
    async fn overview_flags_high_interest_debts() {
        let service = service();
        service
            .create_debt("u1", new_debt("Card", 400.0, 0.0, Some(12.0)))
            .await
            .unwrap();
        service
            .create_debt("u1", new_debt("Family", 100.0, 0.0, None))
            .await
            .unwrap();
        let overview = service.get_overview("u1").unwrap();
        assert_eq!(overview.total_remaining, 500.0);
        assert_eq!(overview.high_risk_count, 1);
        assert_eq!(overview.average_interest_rate, 6.0);
        assert_eq!(overview.active_count, 2);
    }

    #[tokio::test]
    async fn deleting_a_missing_debt_is_not_found() {
        let err = service().delete_debt("u1", "nope").await.unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: "Debt", .. }));
    }
}
