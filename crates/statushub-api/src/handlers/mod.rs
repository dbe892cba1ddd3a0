//! HTTP handlers.

pub mod health;
pub mod presence;

use axum::http::{HeaderMap, header};

use statushub_core::error::AppError;

/// Check the caller-supplied credential against the configured secret.
///
/// Every gateway operation runs this before touching any state; a mismatch
/// is terminal for the request and never affects the store.
pub(crate) fn authorize(headers: &HeaderMap, api_key: &str) -> Result<(), AppError> {
    let supplied = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if supplied != Some(api_key) {
        return Err(AppError::unauthorized("Unauthorized"));
    }
    Ok(())
}
