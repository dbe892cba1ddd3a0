//! Health report handler — triggers one aggregator run over the
//! configured targets and returns the rendered report.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use statushub_core::config::health::HealthTargetConfig;
use statushub_core::error::AppError;
use statushub_health::ProbeTarget;

use crate::error::ApiError;
use crate::handlers::authorize;
use crate::state::AppState;

/// Query string for the health report trigger.
#[derive(Debug, Deserialize)]
pub struct HealthQuery {
    /// `all` (default) or the name of a single configured target.
    #[serde(default)]
    pub target: Option<String>,
}

/// GET /api/v1/health
pub async fn health_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HealthQuery>,
) -> Result<Response, ApiError> {
    authorize(&headers, &state.config.auth.api_key)?;

    let selection = query.target.as_deref().unwrap_or("all");
    let targets = select_targets(&state.config.health.targets, selection)?;

    let report = state.aggregator.run(&targets).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report.render(),
    )
        .into_response())
}

/// Resolve the requested subset of configured targets, in declared order.
fn select_targets(
    configured: &[HealthTargetConfig],
    selection: &str,
) -> Result<Vec<ProbeTarget>, AppError> {
    let all: Vec<ProbeTarget> = configured.iter().map(to_probe_target).collect();

    if selection.eq_ignore_ascii_case("all") {
        // An empty configured list is rejected by the aggregator.
        return Ok(all);
    }

    let matched: Vec<ProbeTarget> = all
        .into_iter()
        .filter(|target| target.name.eq_ignore_ascii_case(selection))
        .collect();

    if matched.is_empty() {
        return Err(AppError::bad_request(format!(
            "unknown target \"{selection}\""
        )));
    }
    Ok(matched)
}

fn to_probe_target(config: &HealthTargetConfig) -> ProbeTarget {
    ProbeTarget {
        name: config.name.clone(),
        url: config.url.clone(),
        liveness_field: config.liveness_field.clone(),
    }
}
