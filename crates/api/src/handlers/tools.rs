//! Handlers for tool listings and tool detail pages.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use rect_core::deal::Deal;
use rect_core::derived::{recommended_tools, related_tools, tools_by_platform};
use rect_core::error::CoreError;
use rect_core::search::DEFAULT_HIGHLIGHT_LIMIT;
use rect_core::tool::{Tool, ToolDisplay};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::{LangParams, LimitParams, ToolListParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload of `GET /tools/{slug}`.
#[derive(Debug, Serialize)]
pub struct ToolDetail {
    pub tool: Tool,
    pub display: ToolDisplay,
    /// Deals live right now for this tool.
    pub deals: Vec<Deal>,
}

async fn find_tool(state: &AppState, slug: &str) -> AppResult<Tool> {
    state
        .catalog
        .tool_by_slug(slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Tool", slug).into())
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /api/v1/tools
///
/// Filtered, sorted, paginated listing. The body is the search result
/// itself: `{ data, total, page, limit, has_more }`.
pub async fn list_tools(
    State(state): State<AppState>,
    Query(params): Query<ToolListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let result = state.catalog.query_tools(&filter).await?;

    tracing::debug!(
        query = ?filter.query,
        sort = %filter.sort,
        total = result.total,
        page = result.page,
        "Tool listing served"
    );

    Ok(Json(result))
}

/// GET /api/v1/tools/featured
pub async fn featured_tools(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit()?.unwrap_or(DEFAULT_HIGHLIGHT_LIMIT);
    let tools = state.catalog.featured_tools(limit).await?;
    Ok(Json(DataResponse { data: tools }))
}

/// GET /api/v1/tools/trending
pub async fn trending_tools(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit()?.unwrap_or(DEFAULT_HIGHLIGHT_LIMIT);
    let tools = state.catalog.trending_tools(limit).await?;
    Ok(Json(DataResponse { data: tools }))
}

/// GET /api/v1/tools/latest
pub async fn latest_tools(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit()?.unwrap_or(DEFAULT_HIGHLIGHT_LIMIT);
    let tools = state.catalog.latest_tools(limit).await?;
    Ok(Json(DataResponse { data: tools }))
}

/// GET /api/v1/tools/recommended
///
/// Accepts the listing filters; sort is always by rating and only the
/// first page is returned.
pub async fn recommended(
    State(state): State<AppState>,
    Query(params): Query<ToolListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.into_filter()?;
    let limit = filter.limit;
    let tools = recommended_tools(state.catalog.as_ref(), filter, limit).await?;
    Ok(Json(DataResponse { data: tools }))
}

/// GET /api/v1/platforms/{platform}/tools
pub async fn platform_tools(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let tools = tools_by_platform(state.catalog.as_ref(), &platform, params.limit()?).await?;
    Ok(Json(DataResponse { data: tools }))
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// GET /api/v1/tools/{slug}
pub async fn get_tool(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LangParams>,
) -> AppResult<impl IntoResponse> {
    let tool = find_tool(&state, &slug).await?;
    let deals = state.catalog.deals_for_tool(&tool.slug, Utc::now()).await?;
    let display = ToolDisplay::new(&tool, params.locale());

    Ok(Json(DataResponse {
        data: ToolDetail {
            tool,
            display,
            deals,
        },
    }))
}

/// GET /api/v1/tools/{slug}/related
pub async fn related(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let tool = find_tool(&state, &slug).await?;
    let tools = related_tools(state.catalog.as_ref(), &tool, params.limit()?).await?;
    Ok(Json(DataResponse { data: tools }))
}
