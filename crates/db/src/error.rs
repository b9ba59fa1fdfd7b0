//! Database error taxonomy.

/// Errors raised by the in-memory store.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to open in-memory database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Failed to load script: {0}")]
    Load(#[source] sqlx::Error),
    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
