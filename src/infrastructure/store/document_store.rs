//! Lazily connected document store over PostgreSQL `JSONB`.

use std::str::FromStr;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::{error, info};

use super::collection::Collection;
use crate::config::mask_connection_string;
use crate::error::AppError;

/// Connection settings for [`DocumentStore::connect_lazy`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub url: String,
    pub database: String,
    pub max_connections: u32,
    /// Seconds to wait when acquiring a connection from the pool.
    pub connect_timeout: u64,
}

/// Shared handle to the document store.
///
/// Constructed once at startup and injected into repositories. Connections
/// are opened on first use and pooled; cloning the handle is cheap.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: PgPool,
    database: String,
}

impl DocumentStore {
    /// Configures a pool without opening any connection.
    ///
    /// # Errors
    ///
    /// Returns a database error if the URL cannot be parsed. Reachability is
    /// only checked on first use (see [`Self::ping`]).
    pub fn connect_lazy(options: &StoreOptions) -> Result<Self, AppError> {
        let connect_options = PgConnectOptions::from_str(&options.url)
            .map_err(|e| {
                error!(error = %e, "Invalid document store URL");
                AppError::database("Invalid document store URL")
            })?
            .database(&options.database);

        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(Duration::from_secs(options.connect_timeout))
            .connect_lazy_with(connect_options);

        info!(
            "Document store configured at {}, using database '{}'",
            mask_connection_string(&options.url),
            options.database
        );

        Ok(Self {
            pool,
            database: options.database.clone(),
        })
    }

    /// Wraps an existing pool, e.g. one provided by `#[sqlx::test]`.
    pub fn from_pool(pool: PgPool, database: impl Into<String>) -> Self {
        Self {
            pool,
            database: database.into(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trips a trivial statement, connecting first if needed.
    ///
    /// # Errors
    ///
    /// Returns a database-family error if the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Applies the embedded migrations that create the `documents` table.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    /// Returns a handle scoped to one named collection.
    pub fn collection(&self, name: &str) -> Collection {
        Collection::new(self.pool.clone(), name)
    }

    /// Reports the server version string.
    pub async fn server_version(&self) -> Result<String, AppError> {
        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(&self.pool)
            .await?;
        Ok(version)
    }

    /// Counts documents per collection, ordered by collection name.
    pub async fn collection_counts(&self) -> Result<Vec<(String, i64)>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT collection, COUNT(*)
            FROM documents
            GROUP BY collection
            ORDER BY collection
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn options(url: &str) -> StoreOptions {
        StoreOptions {
            url: url.to_string(),
            database: "posts".to_string(),
            max_connections: 2,
            connect_timeout: 1,
        }
    }

    #[tokio::test]
    async fn test_connect_lazy_does_not_connect() {
        let store = DocumentStore::connect_lazy(&options("postgres://user:pw@127.0.0.1:1/other"));

        let store = store.unwrap();
        assert_eq!(store.database(), "posts");
    }

    #[tokio::test]
    async fn test_connect_lazy_rejects_malformed_url() {
        let err = DocumentStore::connect_lazy(&options("not a url")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Database);
    }

    #[tokio::test]
    async fn test_ping_unreachable_store() {
        let store = DocumentStore::connect_lazy(&options("postgres://user:pw@127.0.0.1:1/posts"))
            .unwrap();

        let err = store.ping().await.unwrap_err();
        assert!(err.kind().is_a(ErrorKind::Database));
    }
}
