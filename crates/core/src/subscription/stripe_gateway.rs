//! Stripe implementation of the payment gateway.
//!
//! Uses the REST API directly:
//! - `GET /v1/customers` to look a payer up by email
//! - `GET /v1/checkout/sessions` to scan payment history
//! - `GET /v1/checkout/sessions/{id}` to confirm a single payment
//! - `POST /v1/checkout/sessions` and `POST /v1/billing_portal/sessions` for hosted pages

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::subscription_errors::PaymentError;
use super::subscription_model::{CheckoutSession, PaymentCustomer, RedirectUrl};
use super::subscription_traits::PaymentGatewayTrait;
use crate::errors::Result;

pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com/v1";

#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    /// One-time price charged at checkout.
    pub price_id: String,
    /// Public origin of the dashboard, used for redirect URLs.
    pub public_url: String,
    /// Root of the REST API, normally [`DEFAULT_API_BASE_URL`].
    pub api_base_url: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct CustomerResponse {
    id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CustomerDetails {
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    mode: String,
    payment_status: String,
    customer_email: Option<String>,
    customer_details: Option<CustomerDetails>,
}

#[derive(Debug, Deserialize)]
struct UrlResponse {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

impl From<SessionResponse> for CheckoutSession {
    fn from(session: SessionResponse) -> Self {
        CheckoutSession {
            id: session.id,
            mode: session.mode,
            payment_status: session.payment_status,
            customer_email: session.customer_email,
            details_email: session.customer_details.and_then(|d| d.email),
        }
    }
}

pub struct StripeGateway {
    client: Client,
    config: StripeConfig,
}

impl StripeGateway {
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}{}",
            self.config.api_base_url.trim_end_matches('/'),
            endpoint
        )
    }

    async fn dispatch(&self, endpoint: &str, request: RequestBuilder) -> Result<Response> {
        debug!("Stripe request: {}", endpoint);
        let response = request
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PaymentError::Timeout
                } else {
                    PaymentError::Provider(format!("Request failed: {}", e))
                }
            })?;
        Ok(response)
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: &str, request: RequestBuilder) -> Result<T> {
        let response = self.dispatch(endpoint, request).await?;
        Self::parse(endpoint, response).await
    }

    async fn parse<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(PaymentError::Unauthorized.into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| format!("HTTP {} - {}", status, body));
            return Err(PaymentError::Provider(message).into());
        }

        response.json::<T>().await.map_err(|e| {
            PaymentError::Provider(format!("Failed to parse {} response: {}", endpoint, e)).into()
        })
    }
}

#[async_trait]
impl PaymentGatewayTrait for StripeGateway {
    async fn find_customer_by_email(&self, email: &str) -> Result<Option<PaymentCustomer>> {
        let request = self
            .client
            .get(self.url("/customers"))
            .query(&[("email", email), ("limit", "1")]);
        let customers: ListResponse<CustomerResponse> = self.send("/customers", request).await?;
        Ok(customers.data.into_iter().next().map(|c| PaymentCustomer {
            id: c.id,
            email: c.email,
        }))
    }

    async fn list_checkout_sessions(
        &self,
        customer_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<CheckoutSession>> {
        let mut request = self
            .client
            .get(self.url("/checkout/sessions"))
            .query(&[("limit", limit.to_string())]);
        if let Some(customer_id) = customer_id {
            request = request.query(&[("customer", customer_id)]);
        }
        let sessions: ListResponse<SessionResponse> =
            self.send("/checkout/sessions", request).await?;
        Ok(sessions.data.into_iter().map(CheckoutSession::from).collect())
    }

    async fn get_checkout_session(&self, session_id: &str) -> Result<Option<CheckoutSession>> {
        let endpoint = "/checkout/sessions/{id}";
        // Session ids are `cs_` plus alphanumerics; anything else would change the path.
        if !session_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Ok(None);
        }
        let request = self
            .client
            .get(self.url(&format!("/checkout/sessions/{}", session_id)));
        let response = self.dispatch(endpoint, request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let session: SessionResponse = Self::parse(endpoint, response).await?;
        Ok(Some(session.into()))
    }

    async fn create_checkout_session(
        &self,
        email: &str,
        customer_id: Option<&str>,
    ) -> Result<RedirectUrl> {
        let origin = self.config.public_url.trim_end_matches('/');
        let success_url = format!("{}/payment-success", origin);
        let cancel_url = format!("{}/", origin);
        let mut form: Vec<(&str, &str)> = vec![
            ("mode", "payment"),
            ("line_items[0][price]", self.config.price_id.as_str()),
            ("line_items[0][quantity]", "1"),
            ("success_url", success_url.as_str()),
            ("cancel_url", cancel_url.as_str()),
        ];
        match customer_id {
            Some(id) => form.push(("customer", id)),
            None => form.push(("customer_email", email)),
        }
        let request = self.client.post(self.url("/checkout/sessions")).form(&form);
        let session: UrlResponse = self.send("/checkout/sessions", request).await?;
        Ok(RedirectUrl { url: session.url })
    }

    async fn create_portal_session(&self, customer_id: &str) -> Result<RedirectUrl> {
        let return_url = format!("{}/", self.config.public_url.trim_end_matches('/'));
        let request = self
            .client
            .post(self.url("/billing_portal/sessions"))
            .form(&[("customer", customer_id), ("return_url", return_url.as_str())]);
        let session: UrlResponse = self.send("/billing_portal/sessions", request).await?;
        Ok(RedirectUrl { url: session.url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_email_read_from_customer_details() {
        let raw = r#"{
            "id": "cs_test_1",
            "mode": "payment",
            "payment_status": "paid",
            "customer_email": null,
            "customer_details": { "email": "ana@example.com" }
        }"#;
        let session: CheckoutSession = serde_json::from_str::<SessionResponse>(raw)
            .unwrap()
            .into();
        assert!(session.is_paid_payment());
        assert!(session.belongs_to("ANA@example.com"));
    }

    #[test]
    fn session_without_details_falls_back_to_customer_email() {
        let raw = r#"{
            "id": "cs_test_2",
            "mode": "subscription",
            "payment_status": "paid",
            "customer_email": "bia@example.com"
        }"#;
        let session: CheckoutSession = serde_json::from_str::<SessionResponse>(raw)
            .unwrap()
            .into();
        assert!(!session.is_paid_payment());
        assert!(session.belongs_to("bia@example.com"));
    }

    #[test]
    fn session_matches_either_recorded_email() {
        let raw = r#"{
            "id": "cs_test_3",
            "mode": "payment",
            "payment_status": "paid",
            "customer_email": "ana@example.com",
            "customer_details": { "email": "ana.personal@example.com" }
        }"#;
        let session: CheckoutSession = serde_json::from_str::<SessionResponse>(raw)
            .unwrap()
            .into();
        assert!(session.belongs_to("ana@example.com"));
        assert!(session.belongs_to("Ana.Personal@example.com"));
        assert!(!session.belongs_to("bia@example.com"));
    }

    #[test]
    fn provider_error_message_is_extracted() {
        let raw = r#"{"error":{"message":"No such price","type":"invalid_request_error"}}"#;
        let parsed: ErrorResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message.as_deref(), Some("No such price"));
    }
}
