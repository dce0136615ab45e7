//! Helper functions used by the shortcode store.
//!
//! - [`code_generator`] - Shortcode generation and validation
//! - [`url_validator`] - Target URL validation
//! - [`ttl`] - Validity normalization and expiry computation

pub mod code_generator;
pub mod ttl;
pub mod url_validator;
