use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use finboard_core::cards::{CardsOverview, CreditCard, NewCreditCard};

use crate::{
    auth::AuthUser,
    error::ApiResult,
    extract::AppJson,
    main_lib::AppState,
};

async fn list_cards(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<Vec<CreditCard>>> {
    let cards = state.card_service.list_cards(&user.id)?;
    Ok(Json(cards))
}

async fn get_cards_overview(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<CardsOverview>> {
    let overview = state.card_service.get_overview(&user.id)?;
    Ok(Json(overview))
}

async fn create_card(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(card): AppJson<NewCreditCard>,
) -> ApiResult<Json<CreditCard>> {
    let created = state.card_service.create_card(&user.id, card).await?;
    Ok(Json(created))
}

async fn update_card(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppJson(changes): AppJson<NewCreditCard>,
) -> ApiResult<Json<CreditCard>> {
    let updated = state.card_service.update_card(&user.id, &id, changes).await?;
    Ok(Json(updated))
}

async fn delete_card(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    state.card_service.delete_card(&user.id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/overview", get(get_cards_overview))
        .route("/cards/{id}", put(update_card).delete(delete_card))
}
