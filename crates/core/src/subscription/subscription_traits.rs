use async_trait::async_trait;

use super::subscription_model::{
    CheckoutSession, PaymentCustomer, RedirectUrl, Subscriber, SubscriptionStatus,
};
use crate::errors::Result;

/// Trait for subscriber repository operations
#[async_trait]
pub trait SubscriberRepositoryTrait: Send + Sync {
    fn get_by_email(&self, email: &str) -> Result<Option<Subscriber>>;
    /// Inserts or replaces the record with the same email, keeping its id and creation time.
    async fn upsert_subscriber(&self, subscriber: Subscriber) -> Result<Subscriber>;
}

/// The payment provider, as seen by the subscription gate.
#[async_trait]
pub trait PaymentGatewayTrait: Send + Sync {
    async fn find_customer_by_email(&self, email: &str) -> Result<Option<PaymentCustomer>>;
    /// Most recent checkout sessions, optionally restricted to one customer.
    async fn list_checkout_sessions(
        &self,
        customer_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<CheckoutSession>>;
    /// A single checkout session, or `None` when the provider does not know the id.
    async fn get_checkout_session(&self, session_id: &str) -> Result<Option<CheckoutSession>>;
    async fn create_checkout_session(
        &self,
        email: &str,
        customer_id: Option<&str>,
    ) -> Result<RedirectUrl>;
    async fn create_portal_session(&self, customer_id: &str) -> Result<RedirectUrl>;
}

/// Trait for subscription service operations
#[async_trait]
pub trait SubscriptionServiceTrait: Send + Sync {
    /// The stored status, without contacting the provider.
    fn get_local_status(&self, email: &str) -> Result<SubscriptionStatus>;
    fn is_access_granted(&self, email: &str) -> Result<bool>;
    /// Re-derives the status from the provider's payment history and stores it.
    async fn check_status(&self, user_id: &str, email: &str) -> Result<SubscriptionStatus>;
    async fn create_checkout(&self, email: &str) -> Result<RedirectUrl>;
    async fn open_customer_portal(&self, email: &str) -> Result<RedirectUrl>;
    /// Grants one month of access once the provider confirms `payment_id` is a
    /// paid one-time checkout made by `email`.
    async fn activate(
        &self,
        email: &str,
        user_id: Option<&str>,
        payment_id: &str,
    ) -> Result<SubscriptionStatus>;
}
