use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Crawler files, mounted at root level like `/health`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sitemap.xml", get(site::sitemap))
        .route("/robots.txt", get(site::robots))
}
