//! Main application modules.
//!
//! End-of-run reporting used by the export pipeline.

pub mod statistics;

// Re-export public API
pub use statistics::print_run_statistics;
