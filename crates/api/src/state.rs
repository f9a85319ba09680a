use std::sync::Arc;

use rect_core::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The catalog chosen at startup, local or remote.
    pub catalog: Arc<dyn Catalog>,
    pub config: Arc<ServerConfig>,
}
