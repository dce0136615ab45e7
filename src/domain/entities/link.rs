//! Link record representing a shortcode-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping with its validity window.
///
/// Records are immutable once created. Expiry is purely logical: an expired
/// record may still be held by the store, but [`LinkRecord::is_expired_at`]
/// reports it as no longer valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a new link record.
    pub fn new(
        code: String,
        target_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            target_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the record is past its expiry at `now`.
    ///
    /// The comparison is strict: at exactly `expires_at` the record is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
