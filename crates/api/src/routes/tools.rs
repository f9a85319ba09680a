use axum::routing::get;
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Tool routes mounted at `/tools`.
///
/// ```text
/// GET /                 -> list_tools
/// GET /featured         -> featured_tools
/// GET /trending         -> trending_tools
/// GET /latest           -> latest_tools
/// GET /recommended      -> recommended
/// GET /{slug}           -> get_tool
/// GET /{slug}/related   -> related
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tools::list_tools))
        .route("/featured", get(tools::featured_tools))
        .route("/trending", get(tools::trending_tools))
        .route("/latest", get(tools::latest_tools))
        .route("/recommended", get(tools::recommended))
        .route("/{slug}", get(tools::get_tool))
        .route("/{slug}/related", get(tools::related))
}
