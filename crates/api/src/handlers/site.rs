//! `sitemap.xml` and `robots.txt`.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use chrono::Utc;
use rect_core::sitemap::{generate_robots, generate_sitemap};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = state.catalog.snapshot().await?;
    let xml = generate_sitemap(&state.config.site_base_url, &snapshot, Utc::now());
    Ok(([(CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        generate_robots(&state.config.site_base_url),
    )
}
