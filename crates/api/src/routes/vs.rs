use axum::routing::get;
use axum::Router;

use crate::handlers::comparisons;
use crate::state::AppState;

/// Comparison routes mounted at `/vs`.
///
/// ```text
/// GET /          -> list_comparisons
/// GET /{a}/{b}   -> get_comparison
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comparisons::list_comparisons))
        .route("/{a}/{b}", get(comparisons::get_comparison))
}
