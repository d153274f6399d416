use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};
use finboard_core::summary::FinancialSummary;
use finboard_core::utils::YearMonth;
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    error::ApiResult,
    extract::AppQuery,
    main_lib::AppState,
};

#[derive(Deserialize)]
pub(super) struct MonthQuery {
    pub month: Option<YearMonth>,
}

impl MonthQuery {
    /// The requested month, or the current one.
    pub fn period(&self) -> YearMonth {
        self.month.unwrap_or_else(YearMonth::current)
    }
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    AppQuery(query): AppQuery<MonthQuery>,
) -> ApiResult<Json<FinancialSummary>> {
    let summary = state.summary_service.get_summary(&user.id, query.period())?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/summary", get(get_summary))
}
