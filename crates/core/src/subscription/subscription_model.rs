//! Subscription domain models.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local record of a payer's access, keyed by email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub user_id: Option<String>,
    pub email: String,
    pub external_customer_id: Option<String>,
    pub external_payment_id: Option<String>,
    pub subscribed: bool,
    pub subscription_tier: Option<String>,
    pub subscription_end: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Subscriber {
    /// Subscribed with no end date, or an end date still in the future.
    pub fn has_access_at(&self, now: NaiveDateTime) -> bool {
        self.subscribed && self.subscription_end.map_or(true, |end| end > now)
    }

    pub fn has_access(&self) -> bool {
        self.has_access_at(Utc::now().naive_utc())
    }
}

/// What every subscription endpoint reports back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionStatus {
    pub subscribed: bool,
    pub subscription_tier: Option<String>,
    pub subscription_end: Option<NaiveDateTime>,
}

impl From<&Subscriber> for SubscriptionStatus {
    fn from(subscriber: &Subscriber) -> Self {
        SubscriptionStatus {
            subscribed: subscriber.subscribed,
            subscription_tier: subscriber.subscription_tier.clone(),
            subscription_end: subscriber.subscription_end,
        }
    }
}

/// A customer record at the payment provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCustomer {
    pub id: String,
    pub email: Option<String>,
}

/// A hosted checkout session at the payment provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    pub id: String,
    pub mode: String,
    pub payment_status: String,
    /// Email passed when the session was created.
    pub customer_email: Option<String>,
    /// Email the payer entered on the hosted page.
    pub details_email: Option<String>,
}

impl CheckoutSession {
    /// A completed one-time payment.
    pub fn is_paid_payment(&self) -> bool {
        self.payment_status == "paid" && self.mode == "payment"
    }

    /// True when either recorded email matches `email`, ignoring case.
    pub fn belongs_to(&self, email: &str) -> bool {
        [&self.details_email, &self.customer_email]
            .into_iter()
            .flatten()
            .any(|e| e.eq_ignore_ascii_case(email))
    }
}

/// A provider-hosted page the client should open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedirectUrl {
    pub url: String,
}
