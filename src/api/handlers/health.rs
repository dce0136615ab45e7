//! Handler for health check endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Records held, expired ones included.
    pub links_stored: usize,
}

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /_health`
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "linksStored": 42 }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        links_stored: state.store.len(),
    })
}
