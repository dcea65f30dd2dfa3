//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `colo_map` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use colo_map::initialization::init_logger_with;
use colo_map::{run_export, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Opt::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(config).await {
        Ok(report) => {
            println!(
                "✅ Wrote {} colo{} ({} with coordinates, {} warning{}) in {:.1}s",
                report.total_sites,
                if report.total_sites == 1 { "" } else { "s" },
                report.enriched_sites,
                report.warnings,
                if report.warnings == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            log::error!("colo_map error: {:#}", e);
            process::exit(1);
        }
    }
}
