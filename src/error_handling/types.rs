//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by the page fetcher.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed (connect, timeout, body read).
    #[error("network error while fetching URL {url}: {source}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: ReqwestError,
    },

    /// The server answered with something other than 200.
    #[error("unexpected status code while fetching URL {url}: {status}")]
    UnexpectedStatus {
        /// Requested URL.
        url: String,
        /// Status code received.
        status: u16,
    },
}

/// The locations feed was not a JSON array of location objects.
#[derive(Error, Debug)]
#[error("failed to decode locations JSON: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// Errors writing the colo map.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("failed to write {path:?}: {source}")]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The colo list could not be serialized.
    #[error("failed to serialize colo map: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A recoverable problem found while walking the status page.
///
/// Warnings never stop the parse; the caller decides whether they fail the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A top-level group had no readable continent label.
    #[error("empty continent in component group #{group}")]
    EmptyContinent {
        /// Zero-based index of the group on the page.
        group: usize,
    },

    /// A colo label did not look like `"<Place> - (<IATA>)"`.
    #[error("error extracting colo data from {raw:?}")]
    MalformedSite {
        /// The label as read from the page.
        raw: String,
    },
}

impl ParseWarning {
    /// Counter bucket for this warning.
    pub fn warning_type(&self) -> WarningType {
        match self {
            ParseWarning::EmptyContinent { .. } => WarningType::EmptyContinent,
            ParseWarning::MalformedSite { .. } => WarningType::MalformedSite,
        }
    }
}

/// Types of warnings that can occur while parsing the status page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Continent label missing or blank.
    EmptyContinent,
    /// Colo label did not match the expected pattern.
    MalformedSite,
}

/// Types of informational metrics recorded during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Site received coordinates from the locations feed.
    SiteEnriched,
    /// Site had no matching location entry.
    SiteWithoutLocation,
    /// Location entry had no matching site.
    LocationUnmatched,
    /// A later status page entry replaced an earlier one.
    DuplicateCode,
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::EmptyContinent => "Empty continent",
            WarningType::MalformedSite => "Malformed colo label",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::SiteEnriched => "Colos with coordinates",
            InfoType::SiteWithoutLocation => "Colos without coordinates",
            InfoType::LocationUnmatched => "Unmatched locations",
            InfoType::DuplicateCode => "Duplicate IATA codes",
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
