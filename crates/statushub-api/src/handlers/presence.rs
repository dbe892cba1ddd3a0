//! Presence gateway handlers: the query endpoint over the store and the
//! ingest endpoint feeding the presence channel.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use serde::Deserialize;

use statushub_core::error::AppError;
use statushub_core::types::UserId;
use statushub_presence::PresenceUpdate;

use crate::dto::response::{MessageResponse, PresenceResponse};
use crate::error::ApiError;
use crate::handlers::authorize;
use crate::state::AppState;

/// Query string for the presence lookup.
#[derive(Debug, Deserialize)]
pub struct UserStatusQuery {
    /// Member identifier to look up.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// GET /api/v1/userStatus
///
/// Reads the store only; never calls out to the platform. Credential and
/// input checks run before any lookup.
pub async fn user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserStatusQuery>,
) -> Result<Json<PresenceResponse>, ApiError> {
    authorize(&headers, &state.config.auth.api_key)?;

    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::bad_request("user_id not provided"))?;

    let record = state
        .store
        .get(&UserId::from(user_id))
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(PresenceResponse::from(record.as_ref())))
}

/// POST /api/v1/presence
///
/// Transport endpoint for the platform-side bridge: enqueues one raw
/// presence notification onto the single-consumer ingest channel.
pub async fn submit_presence(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<PresenceUpdate>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    authorize(&headers, &state.config.auth.api_key)?;

    state
        .ingest_tx
        .send(event)
        .await
        .map_err(|_| AppError::internal("presence ingest channel closed"))?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "accepted".to_string(),
        }),
    ))
}
