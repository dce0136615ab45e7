//! In-memory storage backends.

pub mod link_repository;

pub use link_repository::InMemoryLinkRepository;
