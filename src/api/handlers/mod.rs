//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod check;
pub mod fallback;
pub mod posts;

pub use check::{debug_handler, health_handler};
pub use fallback::{method_not_allowed_handler, not_found_handler, panic_response};
pub use posts::{create_post_handler, delete_post_handler, get_post_handler, update_post_handler};
