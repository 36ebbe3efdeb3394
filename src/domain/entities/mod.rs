//! Core domain entities.
//!
//! - [`Post`] - A title/content document with a store-assigned id

pub mod post;

pub use post::{Post, strip_reserved};
