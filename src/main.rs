//! StatusHub Server — presence mirror and endpoint health reporter.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, fmt};

use statushub_api::{AppState, build_router};
use statushub_core::config::AppConfig;
use statushub_core::error::AppError;
use statushub_health::HealthAggregator;
use statushub_presence::{PresenceStore, ingest};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment, and verify that every
/// required value is present. A failure here aborts before any server
/// context exists.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("STATUSHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load(&env)?;
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StatusHub v{}", env!("CARGO_PKG_VERSION"));

    // The store exists before either execution context starts; the ingest
    // task and the request handlers share nothing else.
    let store = Arc::new(PresenceStore::new());

    let (ingest_tx, ingest_rx) = mpsc::channel(config.ingest.channel_buffer);
    let presence_ingest = ingest::PresenceIngest::new(Arc::clone(&store), config.platform.guild_id);
    let ingest_handle = ingest::spawn(presence_ingest, ingest_rx);
    tracing::info!(
        guild_id = config.platform.guild_id,
        "Presence ingest task started"
    );

    let aggregator = Arc::new(HealthAggregator::new(Duration::from_millis(
        config.health.deadline_ms,
    ))?);
    tracing::info!(
        targets = config.health.targets.len(),
        deadline_ms = config.health.deadline_ms,
        "Health aggregator initialized"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        store,
        ingest_tx,
        aggregator,
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("StatusHub server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // Dropping the router state drops the last ingest sender, which ends
    // the ingest loop; give it a bounded window to drain.
    tracing::info!("Waiting for ingest task to drain...");
    let _ = tokio::time::timeout(Duration::from_secs(10), ingest_handle).await;

    tracing::info!("StatusHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
