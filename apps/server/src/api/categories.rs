use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use finboard_core::categories::{Category, CategoryKind};
use serde::Deserialize;

use crate::{error::ApiResult, extract::AppQuery, main_lib::AppState};

#[derive(Deserialize)]
struct CategoriesQuery {
    kind: Option<CategoryKind>,
}

async fn list_categories(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<CategoriesQuery>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.list_categories(query.kind)?;
    Ok(Json(categories))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/categories", get(list_categories))
}
