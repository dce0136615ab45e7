//! Core domain entities.
//!
//! - [`LinkRecord`] - A shortcode mapped to a target URL with an expiry instant

pub mod link;

pub use link::LinkRecord;
