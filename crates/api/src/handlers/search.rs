use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/search?q=
///
/// Site-wide search over tools, categories and tags. A blank query returns
/// empty lists.
pub async fn global_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let result = state.catalog.global_search(&params.q).await?;

    tracing::debug!(
        query = %params.q,
        tools = result.tools.len(),
        categories = result.categories.len(),
        tags = result.tags.len(),
        "Global search served"
    );

    Ok(Json(DataResponse { data: result }))
}
