//! Application layer services implementing business logic.
//!
//! Services consume the domain's repository and clock traits and expose a
//! small API to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::short_link_store::ShortLinkStore`] - Short link creation and resolution
pub mod services;
