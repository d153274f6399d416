use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Months, NaiveDateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

use super::subscription_errors::PaymentError;
use super::subscription_model::{RedirectUrl, Subscriber, SubscriptionStatus};
use super::subscription_traits::{
    PaymentGatewayTrait, SubscriberRepositoryTrait, SubscriptionServiceTrait,
};
use crate::constants::{
    CUSTOMER_SESSION_SCAN_LIMIT, ORPHAN_SESSION_SCAN_LIMIT, PAID_SESSION_ACCESS_DAYS,
    PREMIUM_TIER,
};
use crate::errors::{Error, Result};
use crate::users::normalize_email;

pub struct SubscriptionService {
    repository: Arc<dyn SubscriberRepositoryTrait>,
    gateway: Option<Arc<dyn PaymentGatewayTrait>>,
}

impl SubscriptionService {
    pub fn new(
        repository: Arc<dyn SubscriberRepositoryTrait>,
        gateway: Option<Arc<dyn PaymentGatewayTrait>>,
    ) -> Self {
        SubscriptionService {
            repository,
            gateway,
        }
    }

    fn gateway(&self) -> Result<&Arc<dyn PaymentGatewayTrait>> {
        self.gateway
            .as_ref()
            .ok_or(Error::Payment(PaymentError::NotConfigured))
    }

    /// Starts from the stored record for `email`, or a blank unsubscribed one.
    fn base_record(&self, email: &str, now: NaiveDateTime) -> Result<Subscriber> {
        Ok(self
            .repository
            .get_by_email(email)?
            .unwrap_or_else(|| Subscriber {
                id: Uuid::new_v4().to_string(),
                user_id: None,
                email: email.to_string(),
                external_customer_id: None,
                external_payment_id: None,
                subscribed: false,
                subscription_tier: None,
                subscription_end: None,
                created_at: now,
                updated_at: now,
            }))
    }
}

#[async_trait]
impl SubscriptionServiceTrait for SubscriptionService {
    fn get_local_status(&self, email: &str) -> Result<SubscriptionStatus> {
        let email = normalize_email(email)?;
        Ok(self
            .repository
            .get_by_email(&email)?
            .as_ref()
            .map(SubscriptionStatus::from)
            .unwrap_or_default())
    }

    fn is_access_granted(&self, email: &str) -> Result<bool> {
        let email = normalize_email(email)?;
        Ok(self
            .repository
            .get_by_email(&email)?
            .is_some_and(|s| s.has_access()))
    }

    async fn check_status(&self, user_id: &str, email: &str) -> Result<SubscriptionStatus> {
        let email = normalize_email(email)?;
        let Some(gateway) = self.gateway.as_ref() else {
            debug!("No payment provider configured; using stored status for {}", email);
            return self.get_local_status(&email);
        };

        let customer = gateway.find_customer_by_email(&email).await?;
        let paid = match &customer {
            Some(customer) => {
                debug!("Found provider customer {} for {}", customer.id, email);
                gateway
                    .list_checkout_sessions(Some(&customer.id), CUSTOMER_SESSION_SCAN_LIMIT)
                    .await?
                    .iter()
                    .any(|s| s.is_paid_payment())
            }
            None => {
                debug!("No provider customer for {}; scanning recent sessions", email);
                gateway
                    .list_checkout_sessions(None, ORPHAN_SESSION_SCAN_LIMIT)
                    .await?
                    .iter()
                    .any(|s| s.belongs_to(&email) && s.is_paid_payment())
            }
        };

        let now = Utc::now().naive_utc();
        let mut record = self.base_record(&email, now)?;
        record.user_id = Some(user_id.to_string());
        record.external_customer_id = customer.map(|c| c.id);
        record.subscribed = paid;
        record.updated_at = now;
        if paid {
            record.subscription_tier = Some(PREMIUM_TIER.to_string());
            record.subscription_end = Some(now + Duration::days(PAID_SESSION_ACCESS_DAYS));
        } else {
            record.subscription_tier = None;
            record.subscription_end = None;
        }
        info!("Payment check for {}: subscribed={}", email, paid);

        let stored = self.repository.upsert_subscriber(record).await?;
        Ok(SubscriptionStatus::from(&stored))
    }

    async fn create_checkout(&self, email: &str) -> Result<RedirectUrl> {
        let email = normalize_email(email)?;
        let gateway = self.gateway()?;
        let customer = gateway.find_customer_by_email(&email).await?;
        gateway
            .create_checkout_session(&email, customer.as_ref().map(|c| c.id.as_str()))
            .await
    }

    async fn open_customer_portal(&self, email: &str) -> Result<RedirectUrl> {
        let email = normalize_email(email)?;
        let gateway = self.gateway()?;
        let customer = gateway.find_customer_by_email(&email).await?.ok_or_else(|| {
            Error::invalid_input(format!("No payment customer exists for '{}'", email))
        })?;
        gateway.create_portal_session(&customer.id).await
    }

    async fn activate(
        &self,
        email: &str,
        user_id: Option<&str>,
        payment_id: &str,
    ) -> Result<SubscriptionStatus> {
        let email = normalize_email(email)?;
        let payment_id = payment_id.trim();
        if payment_id.is_empty() {
            return Err(Error::invalid_input("A payment reference is required"));
        }
        let gateway = self.gateway()?;
        let session = gateway
            .get_checkout_session(payment_id)
            .await?
            .ok_or_else(|| Error::invalid_input(format!("Unknown payment '{}'", payment_id)))?;
        if !session.belongs_to(&email) {
            warn!("Payment {} does not belong to {}", payment_id, email);
            return Err(Error::invalid_input(format!(
                "Payment '{}' was not made by this account",
                payment_id
            )));
        }
        if !session.is_paid_payment() {
            return Err(Error::invalid_input(format!(
                "Payment '{}' is not a completed one-time payment",
                payment_id
            )));
        }

        let now = Utc::now().naive_utc();
        let end = now.checked_add_months(Months::new(1)).ok_or_else(|| {
            Error::Unexpected("Subscription end date is out of range".to_string())
        })?;

        let mut record = self.base_record(&email, now)?;
        if let Some(user_id) = user_id {
            record.user_id = Some(user_id.to_string());
        }
        record.external_payment_id = Some(session.id);
        record.subscribed = true;
        record.subscription_tier = Some(PREMIUM_TIER.to_string());
        record.subscription_end = Some(end);
        record.updated_at = now;
        info!("Activated subscription for {} until {}", email, end);

        let stored = self.repository.upsert_subscriber(record).await?;
        Ok(SubscriptionStatus::from(&stored))
    }
}
