//! API route configuration.

use crate::api::handlers::{create_short_url_handler, metadata_handler, redirect_shorturls_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL management routes.
///
/// # Endpoints
///
/// - `POST /shorturls`             - Create a short URL
/// - `GET  /shorturls`             - Redirect for the code `shorturls`
/// - `GET  /shorturls/{shortcode}` - Metadata of a short URL
pub fn short_url_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorturls",
            post(create_short_url_handler).get(redirect_shorturls_handler),
        )
        .route("/shorturls/{shortcode}", get(metadata_handler))
}
