//! Infrastructure layer implementing the domain storage contracts.
//!
//! - [`memory`] - Process-local, DashMap-backed storage
//!
//! Records live only as long as the process; nothing is persisted.

pub mod memory;
