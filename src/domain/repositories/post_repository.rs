//! Repository trait for post data access.

use crate::domain::entities::Post;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Outcome of a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateAck {
    /// Number of documents that matched the id (0 or 1).
    pub matched: u64,
    /// Number of documents whose body actually changed.
    pub modified: u64,
}

/// Outcome of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteAck {
    pub deleted: u64,
}

/// Repository interface for the `posts` collection.
///
/// Ids are opaque strings; implementations convert them to the store's native
/// id type and reject malformed ids with [`AppError::bad_request`], which is
/// distinct from a missing record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - document store implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_post.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts a new post and returns its id.
    ///
    /// # Errors
    ///
    /// Returns a database-family [`AppError`] on store failures.
    async fn create(&self, fields: Map<String, Value>) -> Result<String, AppError>;

    /// Finds a post by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Post))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns a bad-request error for malformed ids and a database-family
    /// error on store failures.
    async fn get(&self, id: &str) -> Result<Option<Post>, AppError>;

    /// Merges `fields` into the stored post.
    ///
    /// A missing post is reported as `matched == 0`, not as an error.
    async fn update(&self, id: &str, fields: Map<String, Value>) -> Result<UpdateAck, AppError>;

    /// Removes a post.
    ///
    /// A missing post is reported as `deleted == 0`, not as an error.
    async fn delete(&self, id: &str) -> Result<DeleteAck, AppError>;
}
