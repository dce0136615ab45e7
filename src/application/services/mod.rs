//! Business logic services for the application layer.

pub mod short_link_store;

pub use short_link_store::{ShortLinkStore, short_link};
