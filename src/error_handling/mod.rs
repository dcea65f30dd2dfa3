//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for each pipeline stage (fetch, decode, export)
//! - The non-fatal status page warning taxonomy
//! - Processing statistics tracking (warnings, info metrics)
//!
//! Fetch, decode and export errors are fatal and abort the run. Parse
//! warnings are accumulated and only fail the run under `FailOn::AnyWarning`.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    DecodeError, ExportError, FetchError, InfoType, InitializationError, ParseWarning,
    WarningType,
};
