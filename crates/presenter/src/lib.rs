//! HTML presentation of polling unit totals.
//!
//! Ties the sanitizer, loader and aggregator into one pipeline and serves
//! its result as a table on a single route.

pub mod html;
pub mod pipeline;
pub mod server;

pub use html::{escape_html, render_results};
pub use pipeline::{run_pipeline, run_pipeline_from_file, PipelineConfig, PipelineError};
pub use server::{router, serve, AppState};
