//! # shortlink
//!
//! A small URL shortener built with Axum around an in-memory shortcode store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link record, store errors, storage and clock traits
//! - **Application Layer** ([`application`]) - [`ShortLinkStore`]: create and resolve
//! - **Infrastructure Layer** ([`infrastructure`]) - DashMap-backed link storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Link Lifecycle
//!
//! A link is created once with a target URL, an optional caller-chosen code and
//! a validity in minutes (default 30). It is never updated or deleted. Expiry is
//! lazy: lookups after the expiry instant fail with [`StoreError::Expired`], and
//! the code stays reserved.
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000"
//! cargo run
//!
//! curl -X POST localhost:3000/shorturls \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "https://example.com/page", "validity": 10}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::ShortLinkStore;
pub use domain::StoreError;
pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortLinkStore;
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::LinkRecord;
    pub use crate::domain::error::StoreError;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
