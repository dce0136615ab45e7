//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod create;
pub mod health;
pub mod metadata;
pub mod redirect;

pub use create::create_short_url_handler;
pub use health::health_handler;
pub use metadata::metadata_handler;
pub use redirect::{redirect_handler, redirect_shorturls_handler};
