//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, LOCATIONS_URL, STATUS_PAGE_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What to do with non-fatal status page warnings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Log warnings and keep going (default)
    Never,
    /// Abort before writing output if any warning was recorded
    AnyWarning,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use colo_map::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output: PathBuf::from("out/colos.json"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File the sorted colo map is written to
    pub output: PathBuf,

    /// Status page URL (HTML)
    pub status_url: String,

    /// Locations feed URL (JSON)
    pub locations_url: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Warning policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            status_url: STATUS_PAGE_URL.to_string(),
            locations_url: LOCATIONS_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Write to the default colos.json
/// colo_map
///
/// # Custom output path, abort on malformed status page entries
/// colo_map --output data/colos.json --fail-on any-warning
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "colo_map",
    about = "Builds a JSON map of Cloudflare colos from the status page and locations feed."
)]
pub struct Opt {
    /// Name of the file where to write the colo map
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Status page URL
    #[arg(long, default_value = STATUS_PAGE_URL)]
    pub status_url: String,

    /// Locations feed URL
    #[arg(long, default_value = LOCATIONS_URL)]
    pub locations_url: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit with an error when the status page produced warnings: never|any-warning
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            output: opt.output,
            status_url: opt.status_url,
            locations_url: opt.locations_url,
            user_agent: opt.user_agent,
            timeout_seconds: opt.timeout_seconds,
            log_level: opt.log_level,
            log_format: opt.log_format,
            fail_on: opt.fail_on,
        }
    }
}
