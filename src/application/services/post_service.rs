//! Post CRUD orchestration.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{Post, strip_reserved};
use crate::domain::repositories::PostRepository;
use crate::domain::validation::validate_post_input;
use crate::error::{AppError, ErrorKind};

/// Service for creating, reading, updating and deleting posts.
///
/// Runs validation before every write and turns "no matching document" into
/// [`ErrorKind::NotFound`]. Everything else is delegated to the repository
/// unchanged.
pub struct PostService<R: PostRepository> {
    repository: Arc<R>,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a new post service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new post, returning its id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Validation`] if `title` or `content` is missing or
    /// empty, or if `data` is not an object. Store failures propagate unchanged.
    pub async fn create_post(&self, data: Value) -> Result<String, AppError> {
        validate_post_input(&data)?;
        let fields = into_fields(data)?;

        let id = self.repository.create(fields).await?;
        tracing::info!(post_id = %id, "Post created");

        Ok(id)
    }

    /// Retrieves a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotFound`] if no post has this id and
    /// [`ErrorKind::BadRequest`] if the id is malformed.
    pub async fn get_post(&self, id: &str) -> Result<Post, AppError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::from_kind(ErrorKind::NotFound))
    }

    /// Validates `data` and merges it into the stored post.
    ///
    /// A post that matched but was left unchanged by the merge counts as a
    /// successful update.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Validation`] on invalid input (the store is not
    /// touched) and [`ErrorKind::NotFound`] if no post has this id.
    pub async fn update_post(&self, id: &str, data: Value) -> Result<(), AppError> {
        validate_post_input(&data)?;
        let fields = into_fields(data)?;

        let ack = self.repository.update(id, fields).await?;
        if ack.matched == 0 {
            return Err(AppError::from_kind(ErrorKind::NotFound));
        }

        tracing::info!(post_id = %id, modified = ack.modified, "Post updated");
        Ok(())
    }

    /// Removes a post.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotFound`] if no post has this id.
    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        let ack = self.repository.delete(id).await?;
        if ack.deleted == 0 {
            return Err(AppError::from_kind(ErrorKind::NotFound));
        }

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }
}

/// Unwraps a validated payload into storable fields.
fn into_fields(data: Value) -> Result<serde_json::Map<String, Value>, AppError> {
    match data {
        Value::Object(fields) => Ok(strip_reserved(fields)),
        _ => Err(AppError::from_kind(ErrorKind::Validation)),
    }
}
