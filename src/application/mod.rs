//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers, coordinating validation and repository calls.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Post creation, retrieval, update and removal

pub mod services;
