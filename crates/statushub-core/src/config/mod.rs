//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Required values are checked by [`AppConfig::validate`] before
//! any server context is entered; a missing value is fatal at startup.

pub mod health;
pub mod ingest;
pub mod logging;
pub mod platform;
pub mod server;

use serde::{Deserialize, Serialize};

use self::health::HealthConfig;
use self::ingest::IngestConfig;
use self::logging::LoggingConfig;
use self::platform::PlatformConfig;
use self::server::ServerConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Shared-secret authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Chat-platform scope settings.
    #[serde(default)]
    pub platform: PlatformConfig,
    /// Health probe settings.
    #[serde(default)]
    pub health: HealthConfig,
    /// Presence ingest settings.
    #[serde(default)]
    pub ingest: IngestConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shared-secret authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Static API key compared against the `Authorization` header.
    #[serde(default)]
    pub api_key: String,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `STATUSHUB__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("STATUSHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Check that every required value is present.
    ///
    /// Called once at startup; a failure here aborts process initialization.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.api_key.trim().is_empty() {
            return Err(AppError::configuration("auth.api_key must be set"));
        }
        if self.platform.guild_id == 0 {
            return Err(AppError::configuration("platform.guild_id must be set"));
        }
        for target in &self.health.targets {
            if target.name.trim().is_empty() || target.url.trim().is_empty() {
                return Err(AppError::configuration(
                    "every health target needs a name and a url",
                ));
            }
        }
        Ok(())
    }
}
