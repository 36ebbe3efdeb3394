//! Business logic services for the application layer.

pub mod post_service;

pub use post_service::PostService;
