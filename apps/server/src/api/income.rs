use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use finboard_core::income::{IncomeEntry, IncomeOverview, NewIncomeEntry};

use super::summary::MonthQuery;
use crate::{
    auth::AuthUser,
    error::ApiResult,
    extract::{AppJson, AppQuery},
    main_lib::AppState,
};

async fn list_income(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<IncomeEntry>>> {
    let entries = state.income_service.list_income(&user.id)?;
    Ok(Json(entries))
}

async fn get_income_overview(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppQuery(query): AppQuery<MonthQuery>,
) -> ApiResult<Json<IncomeOverview>> {
    let overview = state
        .income_service
        .get_overview(&user.id, query.period())?;
    Ok(Json(overview))
}

async fn create_income(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(entry): AppJson<NewIncomeEntry>,
) -> ApiResult<Json<IncomeEntry>> {
    let created = state.income_service.create_income(&user.id, entry).await?;
    Ok(Json(created))
}

async fn update_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(changes): AppJson<NewIncomeEntry>,
) -> ApiResult<Json<IncomeEntry>> {
    let updated = state
        .income_service
        .update_income(&user.id, &id, changes)
        .await?;
    Ok(Json(updated))
}

async fn delete_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    state.income_service.delete_income(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/income", get(list_income).post(create_income))
        .route("/income/overview", get(get_income_overview))
        .route("/income/{id}", put(update_income).delete(delete_income))
}
