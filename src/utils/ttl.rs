//! Link validity (TTL) normalization.

use chrono::{DateTime, Duration, Utc};

/// Validity applied when none, or an unusable one, is supplied.
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Resolves the effective TTL in minutes.
///
/// Absent or non-positive values fall back to [`DEFAULT_TTL_MINUTES`]. This
/// is lenient on purpose: a bad TTL is never a validation error.
pub fn normalize_ttl_minutes(ttl_minutes: Option<i64>) -> i64 {
    match ttl_minutes {
        Some(minutes) if minutes > 0 => minutes,
        _ => DEFAULT_TTL_MINUTES,
    }
}

/// Computes the expiry instant for a link created at `created_at`.
///
/// A TTL too large to be represented falls back to the default.
pub fn expiry_for(created_at: DateTime<Utc>, ttl_minutes: Option<i64>) -> DateTime<Utc> {
    let minutes = normalize_ttl_minutes(ttl_minutes);

    Duration::try_minutes(minutes)
        .and_then(|ttl| created_at.checked_add_signed(ttl))
        .unwrap_or_else(|| created_at + Duration::minutes(DEFAULT_TTL_MINUTES))
}
