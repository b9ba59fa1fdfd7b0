//! Database layer for polling unit results.
//!
//! Provides a throwaway in-memory SQLite store that a sanitized dump is
//! loaded into.

pub mod error;
pub mod models;
pub mod pool;

pub use error::DbError;
pub use models::{PollingUnitTotal, StateId};
pub use pool::DbPool;
