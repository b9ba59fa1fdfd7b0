//! Reading dump files and writing the sanitized diagnostic copy.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors reading or writing script files.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write sanitized script {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a SQL dump into memory.
///
/// # Arguments
/// * `path` - Path to the dump file
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<String, ScriptError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Read {} bytes of SQL from {:?}", text.len(), path);
    Ok(text)
}

/// Write sanitized SQL for inspection, replacing any existing file.
///
/// # Arguments
/// * `path` - Destination file
/// * `sql` - Sanitized script text
pub fn write_sanitized<P: AsRef<Path>>(path: P, sql: &str) -> Result<(), ScriptError> {
    let path = path.as_ref();
    fs::write(path, sql).map_err(|source| ScriptError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote sanitized script to {:?}", path);
    Ok(())
}
