//! rect.one API server library.
//!
//! Exposes configuration, backend selection, state, error handling and the
//! route tree so integration tests, the server binary and the `rect-sync`
//! maintenance binary can all reach them.

pub mod backend;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
