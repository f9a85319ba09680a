use axum::routing::get;
use axum::Router;

use crate::handlers::comparisons;
use crate::state::AppState;

/// Alternative routes mounted at `/alternatives`.
///
/// ```text
/// GET /           -> list_alternatives
/// GET /{brand}    -> get_alternative (case-insensitive)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comparisons::list_alternatives))
        .route("/{brand}", get(comparisons::get_alternative))
}
