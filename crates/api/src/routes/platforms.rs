use axum::routing::get;
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Platform routes mounted at `/platforms`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{platform}/tools", get(tools::platform_tools))
}
