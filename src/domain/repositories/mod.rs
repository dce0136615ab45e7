//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for storage operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
