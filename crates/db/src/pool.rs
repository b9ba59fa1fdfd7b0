//! In-memory SQLite store management.

use crate::error::{DbError, DbResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use std::str::FromStr;
use tracing::{debug, info};

/// Connection pool wrapper around a private in-memory SQLite database.
///
/// Every `:memory:` connection is its own database, so the pool is pinned to
/// a single connection that never idles out or expires. Dropping or closing
/// the pool discards all data.
#[derive(Clone)]
pub struct DbPool {
    pool: SqlitePool,
}

impl DbPool {
    /// Create a new, empty in-memory database.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(DbError::Connect)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(DbError::Connect)?;

        debug!("Opened in-memory database");

        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLite pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Execute a sanitized script as a single batch.
    ///
    /// Statements run in order; the first statement SQLite rejects aborts the
    /// batch with [`DbError::Load`]. Statements before it stay applied, but
    /// the store is expected to be discarded on failure.
    ///
    /// # Arguments
    /// * `sql` - Sanitized script text
    pub async fn load_script(&self, sql: &str) -> DbResult<()> {
        let result = self.pool.execute(sql).await.map_err(DbError::Load)?;
        info!("Loaded script, {} rows affected", result.rows_affected());
        Ok(())
    }

    /// List user tables in name order, skipping SQLite internals.
    pub async fn table_names(&self) -> DbResult<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::Query)?;

        debug!("Found {} tables", names.len());
        Ok(names)
    }

    /// Close the pool, releasing the database.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
