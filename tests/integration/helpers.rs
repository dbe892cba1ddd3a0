//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;

use statushub_api::{AppState, build_router};
use statushub_core::config::health::HealthConfig;
use statushub_core::config::ingest::IngestConfig;
use statushub_core::config::logging::LoggingConfig;
use statushub_core::config::platform::PlatformConfig;
use statushub_core::config::server::ServerConfig;
use statushub_core::config::{AppConfig, AuthConfig};
use statushub_core::types::UserId;
use statushub_health::HealthAggregator;
use statushub_presence::{PresenceStore, ingest};

/// API key every test app is configured with.
pub const API_KEY: &str = "test-secret";

/// Guild every test app is scoped to.
pub const GUILD_ID: u64 = 1234;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct handle on the presence store
    pub store: Arc<PresenceStore>,
}

/// One decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// JSON body, `Value::Null` when the body is not JSON.
    pub body: Value,
    /// Raw body text.
    pub text: String,
}

impl TestApp {
    /// Create a test application with no health targets.
    pub fn new() -> Self {
        Self::with_health(HealthConfig::default())
    }

    /// Create a test application with the given health configuration.
    pub fn with_health(health: HealthConfig) -> Self {
        let config = AppConfig {
            server: ServerConfig::default(),
            auth: AuthConfig {
                api_key: API_KEY.to_string(),
            },
            platform: PlatformConfig { guild_id: GUILD_ID },
            health: health.clone(),
            ingest: IngestConfig::default(),
            logging: LoggingConfig::default(),
        };
        config.validate().expect("test config must be valid");

        let store = Arc::new(PresenceStore::new());
        let (ingest_tx, ingest_rx) = mpsc::channel(config.ingest.channel_buffer);
        let presence_ingest = ingest::PresenceIngest::new(Arc::clone(&store), GUILD_ID);
        ingest::spawn(presence_ingest, ingest_rx);

        let aggregator = Arc::new(
            HealthAggregator::new(Duration::from_millis(health.deadline_ms))
                .expect("client build"),
        );

        let state = AppState {
            config: Arc::new(config),
            store: Arc::clone(&store),
            ingest_tx,
            aggregator,
        };

        Self {
            router: build_router(state),
            store,
        }
    }

    /// Issue one request against the router.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        api_key: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(key) = api_key {
            builder = builder.header("authorization", key);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }

    /// Wait until the ingest task has applied an event for `user_id`.
    pub async fn wait_for_user(&self, user_id: &str) {
        for _ in 0..200 {
            if self.store.get(&UserId::from(user_id)).is_some() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("user {user_id} never appeared in the store");
    }
}
