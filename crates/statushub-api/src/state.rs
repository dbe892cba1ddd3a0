//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tokio::sync::mpsc;

use statushub_core::config::AppConfig;
use statushub_health::HealthAggregator;
use statushub_presence::{PresenceStore, PresenceUpdate};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheaply cloneable across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Presence store; the only state shared with the ingest task.
    pub store: Arc<PresenceStore>,
    /// Sender feeding the single-consumer ingest task.
    pub ingest_tx: mpsc::Sender<PresenceUpdate>,
    /// Health probe aggregator.
    pub aggregator: Arc<HealthAggregator>,
}
