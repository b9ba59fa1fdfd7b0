//! Logging and audit output for the polling results service.

pub mod audit;
pub mod logging;

pub use audit::write_audit_sample;
pub use logging::{init_logging, LogFormat};
