//! Handlers for categories and tags.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use rect_core::error::CoreError;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// Largest categories first, counts computed from published tools.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.catalog.categories().await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{slug}
pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = state
        .catalog
        .category_by_slug(&slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Category", &slug))?;
    Ok(Json(DataResponse { data: category }))
}

/// GET /api/v1/tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = state.catalog.tags().await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /api/v1/tags/{slug}
pub async fn get_tag(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let tag = state
        .catalog
        .tag_by_slug(&slug)
        .await?
        .ok_or_else(|| CoreError::not_found("Tag", &slug))?;
    Ok(Json(DataResponse { data: tag }))
}
