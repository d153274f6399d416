use thiserror::Error;

/// Failures talking to the payment provider.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("No payment provider is configured")]
    NotConfigured,

    #[error("Payment provider request timed out")]
    Timeout,

    #[error("Payment provider rejected the credentials")]
    Unauthorized,

    #[error("Payment provider error: {0}")]
    Provider(String),
}
