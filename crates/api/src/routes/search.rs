use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search::global_search))
}
