use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use finboard_core::subscription::{RedirectUrl, SubscriptionStatus};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    extract::AppJson,
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivateRequest {
    #[serde(default)]
    payment_id: Option<String>,
}

async fn get_subscription(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<SubscriptionStatus>> {
    let status = state.subscription_service.get_local_status(&user.email)?;
    Ok(Json(status))
}

async fn check_subscription(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<SubscriptionStatus>> {
    let status = state
        .subscription_service
        .check_status(&user.id, &user.email)
        .await?;
    Ok(Json(status))
}

async fn create_checkout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<RedirectUrl>> {
    let redirect = state
        .subscription_service
        .create_checkout(&user.email)
        .await?;
    Ok(Json(redirect))
}

async fn open_customer_portal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<RedirectUrl>> {
    let redirect = state
        .subscription_service
        .open_customer_portal(&user.email)
        .await?;
    Ok(Json(redirect))
}

async fn activate_subscription(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(request): AppJson<ActivateRequest>,
) -> ApiResult<Json<SubscriptionStatus>> {
    let payment_id = request
        .payment_id
        .ok_or_else(|| ApiError::BadRequest("paymentId is required".to_string()))?;
    tracing::info!(user_id = %user.id, %payment_id, "Subscription activation requested");
    let status = state
        .subscription_service
        .activate(&user.email, Some(&user.id), &payment_id)
        .await?;
    Ok(Json(status))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/subscription", get(get_subscription))
        .route("/subscription/check", post(check_subscription))
        .route("/subscription/checkout", post(create_checkout))
        .route("/subscription/portal", post(open_customer_portal))
        .route("/subscription/activate", post(activate_subscription))
}
