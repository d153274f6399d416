use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::bills_model::{Bill, BillsOverview, NewBill};
use super::bills_traits::{BillRepositoryTrait, BillServiceTrait};
use crate::categories::{ensure_category_exists, CategoryRepositoryTrait};
use crate::errors::{Error, Result};

pub struct BillService {
    repository: Arc<dyn BillRepositoryTrait>,
    categories: Arc<dyn CategoryRepositoryTrait>,
}

impl BillService {
    pub fn new(
        repository: Arc<dyn BillRepositoryTrait>,
        categories: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        BillService {
            repository,
            categories,
        }
    }

    fn check(&self, input: &NewBill) -> Result<()> {
        input.validate()?;
        ensure_category_exists(self.categories.as_ref(), input.category_id.as_deref())
    }
}

#[async_trait]
impl BillServiceTrait for BillService {
    fn list_bills(&self, user_id: &str) -> Result<Vec<Bill>> {
        self.repository.list_bills(user_id)
    }

    fn get_overview(&self, user_id: &str) -> Result<BillsOverview> {
        let bills = self.repository.list_bills(user_id)?;
        Ok(BillsOverview::from_bills(&bills))
    }

    async fn create_bill(&self, user_id: &str, new_bill: NewBill) -> Result<Bill> {
        self.check(&new_bill)?;
        let now = Utc::now().naive_utc();
        let bill = Bill {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_bill.name.trim().to_string(),
            amount: new_bill.amount,
            due_day: new_bill.due_day,
            category_id: new_bill.category_id,
            status: new_bill.status,
            notes: new_bill.notes,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_bill(bill).await
    }

    async fn update_bill(&self, user_id: &str, bill_id: &str, changes: NewBill) -> Result<Bill> {
        self.check(&changes)?;
        let existing = self.repository.get_bill(user_id, bill_id)?;
        let bill = Bill {
            name: changes.name.trim().to_string(),
            amount: changes.amount,
            due_day: changes.due_day,
            category_id: changes.category_id,
            status: changes.status,
            notes: changes.notes,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        self.repository.update_bill(bill).await
    }

    async fn delete_bill(&self, user_id: &str, bill_id: &str) -> Result<()> {
        match self.repository.delete_bill(user_id, bill_id).await? {
            0 => Err(Error::not_found("Bill", bill_id)),
            _ => Ok(()),
        }
    }

    async fn toggle_bill_status(&self, user_id: &str, bill_id: &str) -> Result<Bill> {
        let existing = self.repository.get_bill(user_id, bill_id)?;
        let status = existing.status.toggled();
        debug!("Toggling bill {} to {}", bill_id, status);
        let bill = Bill {
            status,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        self.repository.update_bill(bill).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bills::BillStatus;
    use crate::categories::StaticCategories;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockBillRepository {
        bills: Mutex<Vec<Bill>>,
    }

    #[async_trait]
    impl BillRepositoryTrait for MockBillRepository {
        fn list_bills(&self, user_id: &str) -> Result<Vec<Bill>> {
            let mut bills: Vec<Bill> = self
                .bills
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect();
            bills.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(bills)
        }

        fn get_bill(&self, user_id: &str, bill_id: &str) -> Result<Bill> {
            self.bills
                .lock()
                .unwrap()
                .iter()
                .find(|b| b.user_id == user_id && b.id == bill_id)
                .cloned()
                .ok_or_else(|| Error::not_found("Bill", bill_id))
        }

        async fn insert_bill(&self, bill: Bill) -> Result<Bill> {
            self.bills.lock().unwrap().push(bill.clone());
            Ok(bill)
        }

        async fn update_bill(&self, bill: Bill) -> Result<Bill> {
            let mut bills = self.bills.lock().unwrap();
            let slot = bills
                .iter_mut()
                .find(|b| b.id == bill.id && b.user_id == bill.user_id)
                .ok_or_else(|| Error::not_found("Bill", bill.id.clone()))?;
            *slot = bill.clone();
            Ok(bill)
        }

        async fn delete_bill(&self, user_id: &str, bill_id: &str) -> Result<usize> {
            let mut bills = self.bills.lock().unwrap();
            let before = bills.len();
            bills.retain(|b| !(b.user_id == user_id && b.id == bill_id));
            Ok(before - bills.len())
        }
    }

    fn service() -> BillService {
        BillService::new(
            Arc::new(MockBillRepository::default()),
            Arc::new(StaticCategories::defaults()),
        )
    }

    fn rent(amount: f64) -> NewBill {
        NewBill {
            name: "Rent".to_string(),
            amount,
            due_day: 5,
            category_id: Some("housing".to_string()),
            status: BillStatus::Pending,
            notes: None,
        }
    }

    #[tokio::test]
    async fn toggle_flips_between_paid_and_pending() {
        let service = service();
        let bill = service.create_bill("u1", rent(1200.0)).await.unwrap();
        assert_eq!(bill.status, BillStatus::Pending);

        let toggled = service.toggle_bill_status("u1", &bill.id).await.unwrap();
        assert_eq!(toggled.status, BillStatus::Paid);
        let toggled = service.toggle_bill_status("u1", &bill.id).await.unwrap();
        assert_eq!(toggled.status, BillStatus::Pending);
    }

    #[tokio::test]
    async fn rejects_invalid_due_day_and_unknown_category() {
        let service = service();
        let mut input = rent(10.0);
        input.due_day = 0;
        assert!(service.create_bill("u1", input).await.is_err());

        let mut input = rent(10.0);
        input.category_id = Some("missing".to_string());
        assert!(service.create_bill("u1", input).await.is_err());

        assert!(service.create_bill("u1", rent(-1.0)).await.is_err());
    }

    #[tokio::test]
    async fn other_users_cannot_touch_a_bill() {
        let service = service();
        let bill = service.create_bill("u1", rent(100.0)).await.unwrap();

        let err = service.update_bill("u2", &bill.id, rent(1.0)).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        let err = service.delete_bill("u2", &bill.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(service.list_bills("u2").unwrap().is_empty());
        assert_eq!(service.list_bills("u1").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn overview_splits_paid_and_pending() {
        let service = service();
        service.create_bill("u1", rent(1000.0)).await.unwrap();
        let mut paid = rent(200.0);
        paid.status = BillStatus::Paid;
        service.create_bill("u1", paid).await.unwrap();

        let overview = service.get_overview("u1").unwrap();
        assert_eq!(overview.total, 1200.0);
        assert_eq!(overview.pending_total, 1000.0);
        assert_eq!(overview.paid_total, 200.0);
        assert_eq!(overview.pending_count, 1);
        assert_eq!(overview.paid_count, 1);
    }

    #[tokio::test]
    async fn update_keeps_identity_and_creation_time() {
        let service = service();
        let bill = service.create_bill("u1", rent(100.0)).await.unwrap();
        let updated = service
            .update_bill("u1", &bill.id, rent(150.0))
            .await
            .unwrap();
        assert_eq!(updated.id, bill.id);
        assert_eq!(updated.created_at, bill.created_at);
        assert_eq!(updated.amount, 150.0);
    }
}
