//! DTOs for the post endpoints.
//!
//! Request bodies are schema-less JSON and are validated in the service layer,
//! so only response shapes live here.

use serde::Serialize;

/// `data` payload returned after a post is created.
#[derive(Debug, Serialize)]
pub struct CreatedPost {
    pub id: String,
}
