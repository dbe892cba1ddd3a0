//! Health report types and rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of probing one target.
///
/// Probe failures are data, not errors: a timed-out or refused target is
/// reported here, never raised out of the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Display name of the probed target.
    pub target: String,
    /// Whether the target answered with a 2xx status in time.
    pub reachable: bool,
    /// Time from dispatch to response headers; absent when unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
    /// Classification detail: "timeout", the transport error class, the
    /// HTTP status, or the parsed liveness payload.
    pub detail: String,
}

impl HealthCheckResult {
    /// Result for a target that answered in time.
    pub fn reachable(target: impl Into<String>, latency_ms: f64, detail: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reachable: true,
            latency_ms: Some(latency_ms),
            detail: detail.into(),
        }
    }

    /// Result for a target that failed or rejected the probe.
    pub fn unreachable(target: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reachable: false,
            latency_ms: None,
            detail: detail.into(),
        }
    }

    /// Result for a probe cut off by the shared deadline. Distinct from a
    /// connection error so callers can tell "never answered" apart from
    /// "actively rejected".
    pub fn timeout(target: impl Into<String>) -> Self {
        Self::unreachable(target, "timeout")
    }
}

/// Merged outcome of one aggregator run.
///
/// Results are in declared target order, not completion order, so the
/// rendered report is stable and scannable run-to-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// One result per target, in declared order.
    pub results: Vec<HealthCheckResult>,
}

impl HealthReport {
    /// Render the human-readable multi-line report: one line per target in
    /// declared order, plus a generation timestamp line.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = self
            .results
            .iter()
            .map(|result| match result.latency_ms {
                Some(latency_ms) => format!(
                    "{}: reachable, {:.1} ms, {}",
                    result.target, latency_ms, result.detail
                ),
                None => format!("{}: unreachable, {}", result.target, result.detail),
            })
            .collect();
        lines.push(format!("generated at {}", self.generated_at.to_rfc3339()));
        lines.join("\n")
    }
}
