use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/deals
///
/// Deals live right now, soonest expiry first.
pub async fn list_deals(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let deals = state.catalog.active_deals(Utc::now()).await?;
    Ok(Json(DataResponse { data: deals }))
}
