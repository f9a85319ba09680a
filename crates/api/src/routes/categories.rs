use axum::routing::get;
use axum::Router;

use crate::handlers::taxonomy;
use crate::state::AppState;

/// Category routes mounted at `/categories`.
///
/// ```text
/// GET /          -> list_categories
/// GET /{slug}    -> get_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(taxonomy::list_categories))
        .route("/{slug}", get(taxonomy::get_category))
}
