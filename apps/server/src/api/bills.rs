use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use finboard_core::bills::{Bill, BillsOverview, NewBill};

use crate::{
    auth::AuthUser,
    error::ApiResult,
    extract::AppJson,
    main_lib::AppState,
};

async fn list_bills(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Bill>>> {
    let bills = state.bill_service.list_bills(&user.id)?;
    Ok(Json(bills))
}

async fn get_bills_overview(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<BillsOverview>> {
    let overview = state.bill_service.get_overview(&user.id)?;
    Ok(Json(overview))
}

async fn create_bill(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(bill): AppJson<NewBill>,
) -> ApiResult<Json<Bill>> {
    let created = state.bill_service.create_bill(&user.id, bill).await?;
    Ok(Json(created))
}

async fn update_bill(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(changes): AppJson<NewBill>,
) -> ApiResult<Json<Bill>> {
    let updated = state.bill_service.update_bill(&user.id, &id, changes).await?;
    Ok(Json(updated))
}

async fn delete_bill(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    state.bill_service.delete_bill(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle_bill_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Bill>> {
    let bill = state.bill_service.toggle_bill_status(&user.id, &id).await?;
    Ok(Json(bill))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bills", get(list_bills).post(create_bill))
        .route("/bills/overview", get(get_bills_overview))
        .route("/bills/{id}", put(update_bill).delete(delete_bill))
        .route("/bills/{id}/toggle", post(toggle_bill_status))
}
