//! Domain layer containing the link entity and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`clock`] - Time source abstraction
//! - [`error`] - Store error taxonomy
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod clock;
pub mod entities;
pub mod error;
pub mod repositories;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
