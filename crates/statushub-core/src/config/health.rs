//! Health probe configuration.

use serde::{Deserialize, Serialize};

/// Health probe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Shared absolute deadline for one aggregator run, in milliseconds.
    /// Every probe of a run is cut off at this single deadline.
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,
    /// Probe targets, in report order.
    #[serde(default)]
    pub targets: Vec<HealthTargetConfig>,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            deadline_ms: default_deadline_ms(),
            targets: Vec::new(),
        }
    }
}

/// One probed endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthTargetConfig {
    /// Display name used in reports (e.g. "API", "Website").
    pub name: String,
    /// URL fetched by the probe.
    pub url: String,
    /// Optional top-level JSON field expected in a healthy response body
    /// (e.g. a liveness flag or version string). Parsing is best-effort;
    /// a missing or malformed payload does not mark the target unreachable.
    #[serde(default)]
    pub liveness_field: Option<String>,
}

fn default_deadline_ms() -> u64 {
    2000
}
