use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rect_core::submission::NewSubmission;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/submissions
///
/// Queue a tool for review. Fails with 503 in local data mode.
pub async fn create_submission(
    State(state): State<AppState>,
    Json(input): Json<NewSubmission>,
) -> AppResult<impl IntoResponse> {
    let submission = state.catalog.submit(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}
