//! Database models and types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// State identifier used to filter local government areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId(pub i64);

impl StateId {
    /// Delta State in the INEC numbering.
    pub const DELTA: StateId = StateId(25);

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for StateId {
    fn default() -> Self {
        Self::DELTA
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summed party scores for one polling unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PollingUnitTotal {
    pub polling_unit_name: String,
    pub total_score: i64,
}

impl PollingUnitTotal {
    pub fn new(polling_unit_name: impl Into<String>, total_score: i64) -> Self {
        Self {
            polling_unit_name: polling_unit_name.into(),
            total_score,
        }
    }
}
