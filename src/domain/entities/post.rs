//! Post entity, the single document type served by the API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A stored post.
///
/// `fields` holds the schema-less body (`title`, `content` and any extra keys).
/// `id` and the timestamps are assigned by the store and are never read from
/// client payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Creates a new Post instance.
    pub fn new(
        id: String,
        fields: Map<String, Value>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            fields,
            created_at,
            updated_at,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    pub fn content(&self) -> Option<&str> {
        self.fields.get("content").and_then(Value::as_str)
    }
}

/// Keys that belong to the store and are stripped from write payloads.
pub const RESERVED_KEYS: [&str; 4] = ["id", "_id", "created_at", "updated_at"];

/// Removes store-owned keys from a client payload.
pub fn strip_reserved(mut fields: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_KEYS {
        fields.remove(key);
    }
    fields
}
