//! Handler for short URL creation.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::short_url::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::application::services::short_link;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "validity": 30,        // optional, minutes
///   "shortcode": "abcd1234" // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/abcd1234",
///   "expiry": "2024-05-01T12:30:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a missing, non-string or invalid URL, or for a
/// malformed shortcode.
/// Returns 409 Conflict if the requested shortcode is already in use.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let requested_code = payload.requested_code();

    let record = state.store.create(
        payload.target_url(),
        payload.validity_minutes(),
        requested_code.as_deref(),
    )?;

    let response = CreateShortUrlResponse {
        short_link: short_link(&state.base_url, &record.code),
        expiry: record.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
