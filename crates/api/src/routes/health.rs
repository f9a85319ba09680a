use axum::extract::State;
use axum::{routing::get, Json, Router};
use rect_core::DataSource;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which catalog backend serves requests.
    pub data_source: DataSource,
    /// Whether the catalog backend answered a ping.
    pub backend_healthy: bool,
}

/// GET /health -- returns service and catalog backend health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend_healthy = state.catalog.ping().await.is_ok();

    let status = if backend_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        data_source: state.catalog.source(),
        backend_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
