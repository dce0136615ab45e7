//! DTOs for short URL creation and metadata endpoints.

use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Request to create a short URL.
///
/// Every field is an optional JSON value so that a missing or mistyped `url`
/// is reported as an invalid URL rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateShortUrlRequest {
    /// The original URL to shorten. Anything but a string counts as empty.
    pub url: Option<Value>,

    /// Validity in minutes. Any JSON value is accepted; only integral
    /// numbers are honored.
    pub validity: Option<Value>,

    /// Optional caller-chosen shortcode. An empty string counts as absent.
    pub shortcode: Option<Value>,
}

impl CreateShortUrlRequest {
    /// Returns `validity` if it is an integral JSON number.
    ///
    /// `5` and `5.0` both yield `Some(5)`; strings, fractions, booleans and
    /// `null` yield `None`. Whether the value is positive is left to the store.
    pub fn validity_minutes(&self) -> Option<i64> {
        match self.validity.as_ref()? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Some(i);
                }
                let f = n.as_f64()?;
                // `as` saturates for integral floats outside the i64 range
                (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
            }
            _ => None,
        }
    }

    /// Returns `url` if it is a JSON string, otherwise `""`.
    pub fn target_url(&self) -> &str {
        match &self.url {
            Some(Value::String(url)) => url.as_str(),
            _ => "",
        }
    }

    /// Returns the requested shortcode, treating `null` and `""` as absent.
    ///
    /// Other non-string values are taken as their JSON text, so `1234` asks
    /// for the code `"1234"`. Arrays and objects never match the shortcode
    /// grammar and end up rejected by the store.
    pub fn requested_code(&self) -> Option<Cow<'_, str>> {
        match self.shortcode.as_ref()? {
            Value::Null => None,
            Value::String(code) if code.is_empty() => None,
            Value::String(code) => Some(Cow::Borrowed(code.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

/// Response returned after a short URL is created.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_link: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub expiry: DateTime<Utc>,
}

/// Metadata of an existing short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlMetadataResponse {
    pub original_url: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub expiry: DateTime<Utc>,
}

/// Formats a timestamp as RFC 3339 UTC with millisecond precision,
/// e.g. `2024-05-01T12:00:00.000Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(ts))
}
