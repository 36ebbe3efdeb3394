//! Document store implementation of the post repository.

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::entities::Post;
use crate::domain::repositories::{DeleteAck, PostRepository, UpdateAck};
use crate::error::AppError;
use crate::infrastructure::store::{Collection, DocumentStore};

/// Name of the collection holding posts.
pub const POSTS_COLLECTION: &str = "posts";

/// Post repository backed by the `posts` collection of a [`DocumentStore`].
pub struct PgPostRepository {
    collection: Collection,
}

impl PgPostRepository {
    /// Creates a new repository bound to the store's `posts` collection.
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            collection: store.collection(POSTS_COLLECTION),
        }
    }
}

/// Converts an external id into the store's native id.
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::bad_request(format!("Invalid post id: {}", id)))
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, fields: Map<String, Value>) -> Result<String, AppError> {
        let id = self.collection.insert_one(&fields).await?;
        Ok(id.to_string())
    }

    async fn get(&self, id: &str) -> Result<Option<Post>, AppError> {
        let id = parse_id(id)?;
        let document = self.collection.find_one(id).await?;

        Ok(document.map(|d| Post::new(d.id.to_string(), d.body, d.created_at, d.updated_at)))
    }

    async fn update(&self, id: &str, fields: Map<String, Value>) -> Result<UpdateAck, AppError> {
        let id = parse_id(id)?;
        let result = self.collection.update_one(id, &fields).await?;

        Ok(UpdateAck {
            matched: result.matched,
            modified: result.modified,
        })
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck, AppError> {
        let id = parse_id(id)?;
        let deleted = self.collection.delete_one(id).await?;

        Ok(DeleteAck { deleted })
    }
}
