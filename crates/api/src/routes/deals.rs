use axum::routing::get;
use axum::Router;

use crate::handlers::deals;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(deals::list_deals))
}
