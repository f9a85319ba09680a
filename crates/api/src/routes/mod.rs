pub mod alternatives;
pub mod categories;
pub mod deals;
pub mod health;
pub mod platforms;
pub mod search;
pub mod site;
pub mod submissions;
pub mod tags;
pub mod tools;
pub mod vs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tools                              filtered listing
/// /tools/featured                     featured strip (?limit=)
/// /tools/trending                     trending strip (?limit=)
/// /tools/latest                       newest strip (?limit=)
/// /tools/recommended                  best rated for the listing filters
/// /tools/{slug}                       detail (?lang=)
/// /tools/{slug}/related               related tools (?limit=)
///
/// /platforms/{platform}/tools         platform listing (?limit=)
///
/// /categories                         list
/// /categories/{slug}                  get
/// /tags                               list
/// /tags/{slug}                        get
///
/// /deals                              live deals
///
/// /alternatives                       list
/// /alternatives/{brand}               get with resolved tools
/// /vs                                 list
/// /vs/{a}/{b}                         get (either order)
///
/// /search                             global search (?q=)
/// /submissions                        submit a tool (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tools", tools::router())
        .nest("/platforms", platforms::router())
        .nest("/categories", categories::router())
        .nest("/tags", tags::router())
        .nest("/deals", deals::router())
        .nest("/alternatives", alternatives::router())
        .nest("/vs", vs::router())
        .nest("/search", search::router())
        .nest("/submissions", submissions::router())
}
