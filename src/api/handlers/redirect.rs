//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its target URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// Returns `302 Found` with the stored target in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect(&state, &shortcode)
}

/// `GET /shorturls`.
///
/// The static create route takes precedence over `/{shortcode}`, so the code
/// `shorturls` is resolved here.
pub async fn redirect_shorturls_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect(&state, "shorturls")
}

fn redirect(state: &AppState, shortcode: &str) -> Result<Response, AppError> {
    let record = state.store.resolve(shortcode)?;

    let location = HeaderValue::try_from(record.target_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "shortcode": shortcode }),
        )
    })?;

    debug!(shortcode = %shortcode, target = %record.target_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
