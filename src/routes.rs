//! Top-level router.
//!
//! # Route Structure
//!
//! - `POST /shorturls`             - Create a short URL
//! - `GET  /shorturls/{shortcode}` - Short URL metadata
//! - `GET  /_health`               - Health check
//! - `GET  /{shortcode}`           - Redirect to the target URL
//!
//! `_` is outside the shortcode alphabet, so no stored code can be shadowed by
//! the health route.
//!
//! Every request is traced, and trailing slashes are trimmed before routing.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with tracing, without path normalization.
///
/// Path normalization has to wrap the router from the outside, so this is
/// the innermost piece that can still be served on its own (as tests do).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/_health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
        .merge(api::routes::short_url_routes())
        .with_state(state)
        .layer(tracing::layer())
}
