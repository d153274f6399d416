use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    auth::{self, require_jwt, AuthUser},
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

mod bills;
mod cards;
mod categories;
mod debts;
mod dreams;
mod health;
mod income;
mod investments;
mod subscription;
mod summary;

/// Rejects signed-in users without an active subscription. Runs after [`require_jwt`].
async fn require_subscription(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> ApiResult<Response> {
    if state.subscription_required {
        let user = request
            .extensions()
            .get::<AuthUser>()
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".into()))?;
        if !state.subscription_service.is_access_granted(&user.email)? {
            tracing::debug!(user_id = %user.id, "Subscription gate denied access");
            return Err(ApiError::PaymentRequired);
        }
    }
    Ok(next.run(request).await)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let gated = Router::new()
        .merge(bills::router())
        .merge(income::router())
        .merge(cards::router())
        .merge(debts::router())
        .merge(investments::router())
        .merge(dreams::router())
        .merge(summary::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_subscription,
        ));

    let protected = Router::new()
        .merge(gated)
        .merge(subscription::router())
        .merge(categories::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    let api = Router::new()
        .merge(health::router())
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/session", get(auth::session))
        .merge(protected);

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(CompressionLayer::new())
        .layer(cors)
}
