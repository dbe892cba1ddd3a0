//! Single health probe: one bounded GET, latency measurement, and
//! data-level classification of the outcome.

use std::time::Instant;

use tracing::debug;

use crate::report::HealthCheckResult;

/// Descriptor of one probed endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeTarget {
    /// Display name used in reports.
    pub name: String,
    /// URL fetched by the probe.
    pub url: String,
    /// Optional top-level JSON field expected in a healthy body.
    pub liveness_field: Option<String>,
}

/// Probe one target and classify the result.
///
/// Latency is measured from dispatch to response headers, not the full
/// body. A 2xx answer is reachable even when the body cannot be parsed;
/// the payload problem is noted in the detail instead. The shared run
/// deadline is enforced by the caller, which maps cancellation to the
/// timeout result.
pub async fn probe(client: &reqwest::Client, target: &ProbeTarget) -> HealthCheckResult {
    let start = Instant::now();

    let response = match client.get(&target.url).send().await {
        Ok(response) => response,
        Err(err) => {
            debug!(target = %target.name, error = %err, "Probe transport error");
            return HealthCheckResult::unreachable(&target.name, classify_transport_error(&err));
        }
    };

    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = response.status();

    if !status.is_success() {
        return HealthCheckResult::unreachable(
            &target.name,
            format!("http status {}", status.as_u16()),
        );
    }

    // Target is up; the payload check is best-effort on top of that.
    let detail = match response.json::<serde_json::Value>().await {
        Ok(body) => match &target.liveness_field {
            Some(field) => match body.get(field) {
                Some(value) => format!("{field}={value}"),
                None => format!("payload missing field \"{field}\""),
            },
            None => "ok".to_string(),
        },
        Err(err) => format!("unparseable payload: {err}"),
    };

    HealthCheckResult::reachable(&target.name, latency_ms, detail)
}

/// Keep transport error details distinguishable from the timeout result.
fn classify_transport_error(err: &reqwest::Error) -> String {
    if err.is_connect() {
        format!("connection error: {err}")
    } else if err.is_request() {
        format!("request error: {err}")
    } else {
        format!("transport error: {err}")
    }
}
