//! Script ingestion for polling unit results.
//!
//! Reads a MySQL-flavoured dump and rewrites it into text SQLite accepts.

pub mod sanitizer;
pub mod script;

pub use sanitizer::{sanitize, sanitize_with_report, SanitizeReport};
pub use script::{read_script, write_sanitized, ScriptError};
