use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use finboard_core::investments::{
    Investment, InvestmentProjection, InvestmentsOverview, NewInvestment,
};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::ApiResult,
    extract::{AppJson, AppQuery},
    main_lib::AppState,
};

const DEFAULT_PROJECTION_YEARS: u32 = 10;

#[derive(Deserialize)]
struct ProjectionQuery {
    years: Option<u32>,
}

async fn list_investments(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Investment>>> {
    let investments = state.investment_service.list_investments(&user.id)?;
    Ok(Json(investments))
}

async fn get_investments_overview(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<InvestmentsOverview>> {
    let overview = state.investment_service.get_overview(&user.id)?;
    Ok(Json(overview))
}

async fn get_investment_projection(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppQuery(query): AppQuery<ProjectionQuery>,
) -> ApiResult<Json<Vec<InvestmentProjection>>> {
    let years = query.years.unwrap_or(DEFAULT_PROJECTION_YEARS);
    let projection = state.investment_service.get_projection(&user.id, years)?;
    Ok(Json(projection))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(investment): AppJson<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    let created = state
        .investment_service
        .create_investment(&user.id, investment)
        .await?;
    Ok(Json(created))
}

async fn update_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(changes): AppJson<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    let updated = state
        .investment_service
        .update_investment(&user.id, &id, changes)
        .await?;
    Ok(Json(updated))
}

async fn delete_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    state
        .investment_service
        .delete_investment(&user.id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(list_investments).post(create_investment))
        .route("/investments/overview", get(get_investments_overview))
        .route("/investments/projection", get(get_investment_projection))
        .route(
            "/investments/{id}",
            put(update_investment).delete(delete_investment),
        )
}
