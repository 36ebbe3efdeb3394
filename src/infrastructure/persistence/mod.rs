//! Repository implementations over the document store.
//!
//! - [`PgPostRepository`] - Post storage in the `posts` collection

pub mod pg_post_repository;

pub use pg_post_repository::{POSTS_COLLECTION, PgPostRepository};
