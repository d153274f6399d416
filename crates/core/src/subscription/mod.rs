//! Subscription module - access gate backed by a payment provider.

mod stripe_gateway;
mod subscription_errors;
mod subscription_model;
mod subscription_service;
mod subscription_traits;

pub use stripe_gateway::{StripeConfig, StripeGateway, DEFAULT_API_BASE_URL};
pub use subscription_errors::PaymentError;
pub use subscription_model::{
    CheckoutSession, PaymentCustomer, RedirectUrl, Subscriber, SubscriptionStatus,
};
pub use subscription_service::SubscriptionService;
pub use subscription_traits::{
    PaymentGatewayTrait, SubscriberRepositoryTrait, SubscriptionServiceTrait,
};
