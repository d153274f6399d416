use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use finboard_core::debts::{Debt, DebtsOverview, NewDebt, PayoffSimulation, PayoffStrategy};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    extract::{AppJson, AppQuery},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct StrategyQuery {
    method: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PayoffQuery {
    monthly_payment: Option<f64>,
}

async fn list_debts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Debt>>> {
    let debts = state.debt_service.list_debts(&user.id)?;
    Ok(Json(debts))
}

async fn get_debts_overview(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<DebtsOverview>> {
    let overview = state.debt_service.get_overview(&user.id)?;
    Ok(Json(overview))
}

async fn get_debt_strategy(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppQuery(query): AppQuery<StrategyQuery>,
) -> ApiResult<Json<Vec<Debt>>> {
    let strategy = match query.method.as_deref() {
        Some(method) => method.parse::<PayoffStrategy>()?,
        None => PayoffStrategy::Snowball,
    };
    let ordered = state.debt_service.get_strategy(&user.id, strategy)?;
    Ok(Json(ordered))
}

async fn simulate_debt_payoff(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppQuery(query): AppQuery<PayoffQuery>,
) -> ApiResult<Json<PayoffSimulation>> {
    let monthly_payment = query
        .monthly_payment
        .ok_or_else(|| ApiError::BadRequest("monthlyPayment is required".into()))?;
    let simulation = state
        .debt_service
        .simulate_payoff(&user.id, monthly_payment)?;
    Ok(Json(simulation))
}

async fn create_debt(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(debt): AppJson<NewDebt>,
) -> ApiResult<Json<Debt>> {
    let created = state.debt_service.create_debt(&user.id, debt).await?;
    Ok(Json(created))
}

async fn update_debt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(changes): AppJson<NewDebt>,
) -> ApiResult<Json<Debt>> {
    let updated = state.debt_service.update_debt(&user.id, &id, changes).await?;
    Ok(Json(updated))
}

async fn delete_debt(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    state.debt_service.delete_debt(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/debts", get(list_debts).post(create_debt))
        .route("/debts/overview", get(get_debts_overview))
        .route("/debts/strategy", get(get_debt_strategy))
        .route("/debts/payoff", get(simulate_debt_payoff))
        .route("/debts/{id}", put(update_debt).delete(delete_debt))
}
