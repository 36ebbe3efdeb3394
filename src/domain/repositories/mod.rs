//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod post_repository;

pub use post_repository::{DeleteAck, PostRepository, UpdateAck};

#[cfg(test)]
pub use post_repository::MockPostRepository;
