//! Target URL validation.
//!
//! Targets are stored exactly as submitted; parsing only decides whether the
//! input is an absolute URL.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is an absolute URL with a scheme and a host.
///
/// Any scheme is accepted as long as the URL carries a host, so
/// `ftp://files.example.com/a.txt` passes while `mailto:someone@example.com`
/// does not.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for an empty string,
/// [`UrlValidationError::InvalidFormat`] for unparseable or relative input and
/// [`UrlValidationError::MissingHost`] for host-less URLs.
pub fn validate_target_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input)?;

    if !url.has_host() || url.host_str().is_some_and(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
