//! Concurrent health aggregation under one shared absolute deadline.

use std::time::Duration;

use futures::future;
use tokio::time::Instant;
use tracing::info;

use statushub_core::error::AppError;

use crate::probe::{ProbeTarget, probe};
use crate::report::{HealthCheckResult, HealthReport};

/// Fans out one probe per target and merges the results into a report.
///
/// All probes of a run share a single absolute deadline computed before
/// dispatch, so total wall-clock cost is bounded by the deadline
/// regardless of target count. A probe cut off by the deadline still
/// contributes its slot, as the timeout result.
#[derive(Debug, Clone)]
pub struct HealthAggregator {
    client: reqwest::Client,
    deadline: Duration,
}

impl HealthAggregator {
    /// Create an aggregator with the configured run deadline.
    pub fn new(deadline: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, deadline })
    }

    /// Probe every target concurrently and assemble the report.
    ///
    /// The report preserves the input target order. Individual probe
    /// failures are data inside the report; the only error is a malformed
    /// (empty) target list.
    pub async fn run(&self, targets: &[ProbeTarget]) -> Result<HealthReport, AppError> {
        if targets.is_empty() {
            return Err(AppError::validation("no probe targets selected"));
        }

        let deadline = Instant::now() + self.deadline;

        let probes = targets.iter().map(|target| {
            let client = &self.client;
            async move {
                match tokio::time::timeout_at(deadline, probe(client, target)).await {
                    Ok(result) => result,
                    // Cancelled at the deadline; the dropped request future
                    // aborts the outbound connection.
                    Err(_) => HealthCheckResult::timeout(&target.name),
                }
            }
        });

        let results = future::join_all(probes).await;
        let reachable = results.iter().filter(|r| r.reachable).count();
        info!(
            targets = results.len(),
            reachable,
            "Health report generated"
        );

        Ok(HealthReport {
            generated_at: chrono::Utc::now(),
            results,
        })
    }
}
