//! colo_map library: Cloudflare colo map builder
//!
//! Fetches the Cloudflare status page (colos grouped by continent) and the
//! speed test locations feed (coordinates per IATA code), merges them by IATA
//! code and writes the result as a sorted JSON array.
//!
//! # Example
//!
//! ```no_run
//! use colo_map::{run_export, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output: PathBuf::from("colos.json"),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Wrote {} colos ({} with coordinates)",
//!          report.total_sites, report.enriched_sites);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `run_export` and `fetch_page` must be called from within a Tokio runtime.

#![deny(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod export;
mod fetch;
pub mod initialization;
mod merge;
mod models;
mod parse;
mod utils;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel, Opt};
pub use error_handling::{
    DecodeError, ExportError, FetchError, InfoType, InitializationError, ParseWarning,
    ProcessingStats, WarningType,
};
pub use export::{render_sites_json, sort_sites, write_sites_json};
pub use fetch::fetch_page;
pub use merge::{enrich_sites, MergeSummary};
pub use models::{GeoInfo, Location, Site};
pub use parse::{decode_locations, parse_status_page, split_site_label, StatusPage};
pub use run::{run_export, ExportReport};

// Internal run module (contains the pipeline orchestration)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{bail, Context, Result};
    use log::{info, warn};

    use crate::app::print_run_statistics;
    use crate::config::{Config, FailOn};
    use crate::error_handling::ProcessingStats;
    use crate::export::{sort_sites, write_sites_json};
    use crate::fetch::fetch_page;
    use crate::initialization::init_client;
    use crate::merge::enrich_sites;
    use crate::parse::{decode_locations, parse_status_page};

    /// Results of a completed export.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Number of colos written
        pub total_sites: usize,
        /// Colos that received coordinates
        pub enriched_sites: usize,
        /// Locations whose IATA code matched no colo
        pub unmatched_locations: usize,
        /// Non-fatal status page warnings
        pub warnings: usize,
        /// File the colo map was written to
        pub output_path: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the export: fetch both sources, parse, merge, sort, write.
    ///
    /// The status page is fetched and parsed first, then the locations feed.
    /// Nothing is written unless every step succeeds.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Either fetch fails or returns a non-200 status
    /// - The locations feed is not valid JSON
    /// - `config.fail_on` is `FailOn::AnyWarning` and the status page produced warnings
    /// - The output file cannot be written
    pub async fn run_export(config: Config) -> Result<ExportReport> {
        let start_time = Instant::now();
        let stats = ProcessingStats::new();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        let status_body = fetch_page(&client, &config.status_url)
            .await
            .context("Failed to fetch status page")?;
        let status_page = parse_status_page(&status_body, &stats);
        info!(
            "Parsed {} colos from status page ({} warnings)",
            status_page.sites.len(),
            status_page.warnings.len()
        );

        if let Some(first) = status_page.warnings.first() {
            if config.fail_on == FailOn::AnyWarning {
                bail!(
                    "Status page produced {} warning(s), first: {}",
                    status_page.warnings.len(),
                    first
                );
            }
            warn!(
                "Continuing with {} status page warning(s)",
                status_page.warnings.len()
            );
        }
        let warnings = status_page.warnings.len();

        let locations_body = fetch_page(&client, &config.locations_url)
            .await
            .context("Failed to fetch locations feed")?;
        let locations =
            decode_locations(&locations_body).context("Failed to decode locations feed")?;
        info!("Decoded {} locations", locations.len());

        let mut sites = status_page.sites;
        let summary = enrich_sites(&mut sites, &locations, &stats);

        let sorted = sort_sites(sites);
        write_sites_json(&sorted, &config.output)
            .await
            .context("Failed to write colo map")?;

        print_run_statistics(&stats);

        Ok(ExportReport {
            total_sites: sorted.len(),
            enriched_sites: summary.enriched,
            unmatched_locations: summary.unmatched_locations,
            warnings,
            output_path: config.output,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
