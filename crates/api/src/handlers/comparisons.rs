//! Handlers for "alternatives to X" and "X vs Y" pages.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use rect_core::alternative::{Alternative, ComparisonPair};
use rect_core::error::CoreError;
use rect_core::tool::Tool;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload of `GET /alternatives/{brand}`.
#[derive(Debug, Serialize)]
pub struct AlternativeDetail {
    pub alternative: Alternative,
    /// Published tools named by the alternative's items, in item order.
    pub tools: Vec<Tool>,
}

/// Payload of `GET /vs/{a}/{b}`.
#[derive(Debug, Serialize)]
pub struct ComparisonDetail {
    pub comparison: ComparisonPair,
    pub tools: Vec<Tool>,
}

/// Resolve slugs to published tools, skipping any that are missing.
async fn resolve_tools<'a, I>(state: &AppState, slugs: I) -> AppResult<Vec<Tool>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tools = Vec::new();
    for slug in slugs {
        if let Some(tool) = state.catalog.tool_by_slug(slug).await? {
            tools.push(tool);
        }
    }
    Ok(tools)
}

// ---------------------------------------------------------------------------
// Alternatives
// ---------------------------------------------------------------------------

/// GET /api/v1/alternatives
pub async fn list_alternatives(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let alternatives = state.catalog.alternatives().await?;
    Ok(Json(DataResponse { data: alternatives }))
}

/// GET /api/v1/alternatives/{brand}
pub async fn get_alternative(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> AppResult<impl IntoResponse> {
    let alternative = state
        .catalog
        .alternative_by_brand(&brand)
        .await?
        .ok_or_else(|| CoreError::not_found("Alternative", &brand))?;
    let slugs: Vec<&str> = alternative.items.iter().map(|i| i.tool_slug.as_str()).collect();
    let tools = resolve_tools(&state, slugs).await?;

    Ok(Json(DataResponse {
        data: AlternativeDetail { alternative, tools },
    }))
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

/// GET /api/v1/vs
pub async fn list_comparisons(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pairs = state.catalog.comparisons().await?;
    Ok(Json(DataResponse { data: pairs }))
}

/// GET /api/v1/vs/{a}/{b}
///
/// The pair matches in either order.
pub async fn get_comparison(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let comparison = state
        .catalog
        .comparison(&a, &b)
        .await?
        .ok_or_else(|| CoreError::not_found("Comparison", format!("{a}-vs-{b}")))?;
    let tools = resolve_tools(
        &state,
        [comparison.a_slug.as_str(), comparison.b_slug.as_str()],
    )
    .await?;

    Ok(Json(DataResponse {
        data: ComparisonDetail { comparison, tools },
    }))
}
