//! Per-polling-unit score totals for one state.

use polls_db::error::DbResult;
use polls_db::{DbError, DbPool, PollingUnitTotal, StateId};
use tracing::info;

/// Sums `party_score` per polling unit name for every unit whose LGA
/// belongs to the bound state. Rows come back sorted by name.
pub const STATE_TOTALS_QUERY: &str = r#"
SELECT COALESCE(pu.polling_unit_name, '') AS polling_unit_name,
       COALESCE(SUM(rs.party_score), 0) AS total_score
FROM polling_unit pu
JOIN announced_pu_results rs ON pu.uniqueid = rs.polling_unit_uniqueid
JOIN lga ON pu.lga_id = lga.lga_id
WHERE lga.state_id = ?
GROUP BY COALESCE(pu.polling_unit_name, '')
ORDER BY COALESCE(pu.polling_unit_name, '')
"#;

/// Aggregate announced results for every polling unit in a state.
///
/// # Arguments
/// * `db` - A store with the dump already loaded
/// * `state_id` - State whose LGAs are included
///
/// # Returns
/// `(polling_unit_name, total_score)` rows ordered by name, or
/// [`DbError::Query`] when the schema lacks a referenced table or column
pub async fn aggregate_state_totals(
    db: &DbPool,
    state_id: StateId,
) -> DbResult<Vec<PollingUnitTotal>> {
    let rows: Vec<PollingUnitTotal> = sqlx::query_as(STATE_TOTALS_QUERY)
        .bind(state_id.get())
        .fetch_all(db.pool())
        .await
        .map_err(DbError::Query)?;

    info!("Aggregated {} polling units for state {}", rows.len(), state_id);
    Ok(rows)
}
