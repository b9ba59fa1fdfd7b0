//! Result aggregation over a loaded polling unit store.

pub mod totals;

pub use totals::{aggregate_state_totals, STATE_TOTALS_QUERY};
