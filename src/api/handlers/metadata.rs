//! Handler for short URL metadata.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::short_url::ShortUrlMetadataResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the target and validity window of a short URL.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com/page",
///   "createdAt": "2024-05-01T12:00:00.000Z",
///   "expiry": "2024-05-01T12:30:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
/// Returns 410 Gone if the link has expired, same as the redirect route.
pub async fn metadata_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortUrlMetadataResponse>, AppError> {
    let record = state.store.resolve(&shortcode)?;

    Ok(Json(ShortUrlMetadataResponse {
        original_url: record.target_url,
        created_at: record.created_at,
        expiry: record.expires_at,
    }))
}
