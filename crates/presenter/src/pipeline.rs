//! Sanitize, load and aggregate in one pass.

use polls_aggregator::aggregate_state_totals;
use polls_db::{DbError, DbPool, PollingUnitTotal, StateId};
use polls_ingestion::{read_script, sanitize_with_report, ScriptError};
use std::path::Path;
use tracing::{debug, info};

/// Parameters for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// State whose polling units are totalled.
    pub state_id: StateId,
    /// Display name for the state, used in page headings.
    pub state_name: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            state_id: StateId::DELTA,
            state_name: "Delta State".to_string(),
        }
    }
}

/// Errors from a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Db(#[from] DbError),
}

impl PipelineError {
    /// True when the engine rejected the sanitized script.
    pub fn is_load_error(&self) -> bool {
        matches!(self, PipelineError::Db(DbError::Load(_)))
    }

    /// True when the aggregation query did not match the loaded schema.
    pub fn is_query_error(&self) -> bool {
        matches!(self, PipelineError::Db(DbError::Query(_)))
    }
}

/// Run sanitize, load and aggregate against a fresh in-memory store.
///
/// The store is closed before returning, on success and on failure.
///
/// # Arguments
/// * `script` - Raw dump text
/// * `state_id` - State to aggregate
pub async fn run_pipeline(
    script: &str,
    state_id: StateId,
) -> Result<Vec<PollingUnitTotal>, PipelineError> {
    let (sql, report) = sanitize_with_report(script);
    debug!(?report, "Sanitizer finished");

    let db = DbPool::in_memory().await?;
    let result = load_and_aggregate(&db, &sql, state_id).await;
    db.close().await;

    let rows = result?;
    info!("Pipeline produced {} rows for state {}", rows.len(), state_id);
    Ok(rows)
}

/// Read a dump from disk and run the pipeline on it.
pub async fn run_pipeline_from_file<P: AsRef<Path>>(
    path: P,
    state_id: StateId,
) -> Result<Vec<PollingUnitTotal>, PipelineError> {
    let script = read_script(path)?;
    run_pipeline(&script, state_id).await
}

async fn load_and_aggregate(
    db: &DbPool,
    sql: &str,
    state_id: StateId,
) -> Result<Vec<PollingUnitTotal>, DbError> {
    db.load_script(sql).await?;
    aggregate_state_totals(db, state_id).await
}
