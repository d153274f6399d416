use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use finboard_core::dreams::{
    Dream, DreamContribution, DreamsOverview, NewDream, NewDreamContribution,
};

use crate::{
    auth::AuthUser,
    error::ApiResult,
    extract::AppJson,
    main_lib::AppState,
};

async fn list_dreams(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Dream>>> {
    let dreams = state.dream_service.list_dreams(&user.id)?;
    Ok(Json(dreams))
}

async fn get_dreams_overview(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<DreamsOverview>> {
    let overview = state.dream_service.get_overview(&user.id)?;
    Ok(Json(overview))
}

async fn create_dream(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(dream): AppJson<NewDream>,
) -> ApiResult<Json<Dream>> {
    let created = state.dream_service.create_dream(&user.id, dream).await?;
    Ok(Json(created))
}

async fn update_dream(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(changes): AppJson<NewDream>,
) -> ApiResult<Json<Dream>> {
    let updated = state
        .dream_service
        .update_dream(&user.id, &id, changes)
        .await?;
    Ok(Json(updated))
}

async fn delete_dream(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    state.dream_service.delete_dream(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_contributions(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<DreamContribution>>> {
    let contributions = state.dream_service.list_contributions(&user.id, &id)?;
    Ok(Json(contributions))
}

/// Records a contribution and returns the dream with its new saved amount.
async fn add_contribution(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(contribution): AppJson<NewDreamContribution>,
) -> ApiResult<Json<Dream>> {
    let dream = state
        .dream_service
        .add_contribution(&user.id, &id, contribution)
        .await?;
    Ok(Json(dream))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dreams", get(list_dreams).post(create_dream))
        .route("/dreams/overview", get(get_dreams_overview))
        .route("/dreams/{id}", put(update_dream).delete(delete_dream))
        .route(
            "/dreams/{id}/contributions",
            get(list_contributions).post(add_contribution),
        )
}
