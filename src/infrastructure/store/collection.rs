//! Collection-scoped CRUD on the `documents` table.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::AppError;

/// A stored document.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub body: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Map<String, Value>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            body: row.body.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Counts reported by [`Collection::update_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched: u64,
    pub modified: u64,
}

/// Handle to one named collection. Every statement is a single-row operation
/// and therefore atomic per document.
#[derive(Debug, Clone)]
pub struct Collection {
    pool: PgPool,
    name: String,
}

impl Collection {
    pub(crate) fn new(pool: PgPool, name: &str) -> Self {
        Self {
            pool,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a document and returns its newly assigned id.
    pub async fn insert_one(&self, body: &Map<String, Value>) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(&self.name)
            .bind(Json(body))
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    /// Finds a document by id.
    pub async fn find_one(&self, id: Uuid) -> Result<Option<Document>, AppError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body, created_at, updated_at
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(&self.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Document::from))
    }

    /// Shallow-merges `fields` into the document's top-level keys.
    ///
    /// `modified` is 0 when the merge leaves the body unchanged.
    pub async fn update_one(
        &self,
        id: Uuid,
        fields: &Map<String, Value>,
    ) -> Result<UpdateResult, AppError> {
        let (matched, modified): (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (
                SELECT id, body
                FROM documents
                WHERE collection = $1 AND id = $2
                FOR UPDATE
            ),
            updated AS (
                UPDATE documents d
                SET body = d.body || $3::jsonb, updated_at = NOW()
                FROM target t
                WHERE d.id = t.id AND (t.body || $3::jsonb) IS DISTINCT FROM t.body
                RETURNING d.id
            )
            SELECT
                (SELECT COUNT(*) FROM target) AS matched,
                (SELECT COUNT(*) FROM updated) AS modified
            "#,
        )
        .bind(&self.name)
        .bind(id)
        .bind(Json(fields))
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateResult {
            matched: matched.max(0) as u64,
            modified: modified.max(0) as u64,
        })
    }

    /// Deletes a document and returns the number of rows removed.
    pub async fn delete_one(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(&self.name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
