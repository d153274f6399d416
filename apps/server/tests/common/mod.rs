#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    body::{to_bytes, Body},
    extract::{Path, State},
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use finboard_core::subscription::StripeConfig;
use finboard_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

pub const STRIPE_TEST_KEY: &str = "sk_test_finboard";

pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub async fn spawn_app(subscription_required: bool) -> TestApp {
    spawn_app_with(subscription_required, None).await
}

pub async fn spawn_app_with(subscription_required: bool, stripe: Option<StripeConfig>) -> TestApp {
    let dir = tempdir().unwrap();
    let mut config = Config::from_env().unwrap();
    config.db_path = dir.path().join("test.db").to_string_lossy().to_string();
    config.secret_key = Some(BASE64.encode([42u8; 32]));
    config.subscription_required = subscription_required;
    config.cors_allow = vec!["*".to_string()];
    config.stripe = stripe;

    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        _dir: dir,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.request(request).await
    }

    /// Sends a prebuilt request and decodes the body as JSON, or `Null` when it is not.
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    /// Registers a user and returns its access token.
    pub async fn register(&self, email: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/auth/register",
                None,
                Some(json!({ "email": email, "password": "s3cret-pass" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["accessToken"].as_str().unwrap().to_string()
    }
}

/// In-process stand-in for the Stripe REST API.
#[derive(Clone, Default)]
pub struct StripeMock {
    sessions: Arc<Mutex<HashMap<String, Value>>>,
    checkout_forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl StripeMock {
    /// Serves the mock on an ephemeral local port and returns it with its `/v1` base URL.
    pub async fn start() -> (Self, String) {
        let mock = StripeMock::default();
        let router = Router::new()
            .route("/v1/customers", get(list_customers))
            .route(
                "/v1/checkout/sessions",
                get(list_sessions).post(create_checkout_session),
            )
            .route("/v1/checkout/sessions/{id}", get(get_session))
            .route("/v1/billing_portal/sessions", post(create_portal_session))
            .with_state(mock.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (mock, format!("http://{addr}/v1"))
    }

    pub fn config(base_url: &str, price_id: &str) -> StripeConfig {
        StripeConfig {
            secret_key: STRIPE_TEST_KEY.to_string(),
            price_id: price_id.to_string(),
            public_url: "https://finboard.test".to_string(),
            api_base_url: base_url.to_string(),
        }
    }

    /// Registers a checkout session as if the payer `email` completed it on the hosted page.
    pub fn add_session(&self, id: &str, email: &str, mode: &str, payment_status: &str) {
        self.sessions.lock().unwrap().insert(
            id.to_string(),
            json!({
                "id": id,
                "mode": mode,
                "payment_status": payment_status,
                "customer_email": null,
                "customer_details": { "email": email }
            }),
        );
    }

    pub fn checkout_forms(&self) -> Vec<HashMap<String, String>> {
        self.checkout_forms.lock().unwrap().clone()
    }
}

fn stripe_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "message": message } }))).into_response()
}

fn authorized(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {STRIPE_TEST_KEY}");
    match headers.get(header::AUTHORIZATION) {
        Some(value) if value.as_bytes() == expected.as_bytes() => Ok(()),
        _ => Err(stripe_error(StatusCode::UNAUTHORIZED, "Invalid API Key provided")),
    }
}

async fn list_customers(headers: HeaderMap) -> Response {
    if let Err(rejection) = authorized(&headers) {
        return rejection;
    }
    Json(json!({ "data": [] })).into_response()
}

async fn list_sessions(State(mock): State<StripeMock>, headers: HeaderMap) -> Response {
    if let Err(rejection) = authorized(&headers) {
        return rejection;
    }
    let data: Vec<Value> = mock.sessions.lock().unwrap().values().cloned().collect();
    Json(json!({ "data": data })).into_response()
}

async fn get_session(
    State(mock): State<StripeMock>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(rejection) = authorized(&headers) {
        return rejection;
    }
    match mock.sessions.lock().unwrap().get(&id) {
        Some(session) => Json(session.clone()).into_response(),
        None => stripe_error(
            StatusCode::NOT_FOUND,
            &format!("No such checkout.session: '{id}'"),
        ),
    }
}

async fn create_checkout_session(
    State(mock): State<StripeMock>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    if let Err(rejection) = authorized(&headers) {
        return rejection;
    }
    let price = form.get("line_items[0][price]").cloned().unwrap_or_default();
    if price != "price_premium" {
        return stripe_error(
            StatusCode::BAD_REQUEST,
            &format!("No such price: '{price}'"),
        );
    }
    mock.checkout_forms.lock().unwrap().push(form);
    Json(json!({
        "id": "cs_new",
        "url": "https://checkout.stripe.test/c/pay/cs_new"
    }))
    .into_response()
}

async fn create_portal_session(headers: HeaderMap) -> Response {
    if let Err(rejection) = authorized(&headers) {
        return rejection;
    }
    Json(json!({ "url": "https://billing.stripe.test/p/session" })).into_response()
}
