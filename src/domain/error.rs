//! Error taxonomy of the shortcode store.

use thiserror::Error;

/// Errors returned by [`crate::application::services::ShortLinkStore`].
///
/// Every variant is returned as a value; a failed `create` never leaves a
/// partial insertion behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The target is not a parseable absolute URL with a host.
    #[error("Invalid or missing URL: {reason}")]
    InvalidUrl { reason: String },

    /// The requested shortcode does not match `^[A-Za-z0-9]{4,16}$`.
    #[error("Invalid shortcode format. Must be alphanumeric and 4-16 chars: {code:?}")]
    InvalidShortcode { code: String },

    /// The requested shortcode is already held by the store.
    #[error("Shortcode already in use: {code}")]
    ShortcodeConflict { code: String },

    #[error("Shortcode not found: {code}")]
    NotFound { code: String },

    /// The record exists but its expiry instant has passed.
    #[error("Short link has expired: {code}")]
    Expired { code: String },

    #[error("Internal store error: {reason}")]
    Internal { reason: String },
}
