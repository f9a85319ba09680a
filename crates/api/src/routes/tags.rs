use axum::routing::get;
use axum::Router;

use crate::handlers::taxonomy;
use crate::state::AppState;

/// Tag routes mounted at `/tags`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(taxonomy::list_tags))
        .route("/{slug}", get(taxonomy::get_tag))
}
