//! # statushub-api
//!
//! HTTP API layer for StatusHub: the query gateway over the presence
//! store, the ingest endpoint feeding the presence channel, and the
//! health-report trigger. Built on Axum with tower-http tracing.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
