//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortLinkStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ShortLinkStore>,
    /// Public address prefixed to codes when building short links.
    pub base_url: String,
}

impl AppState {
    pub fn new(store: Arc<ShortLinkStore>, base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }
}
