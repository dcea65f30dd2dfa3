//! Source document parsing.
//!
//! This module provides:
//! - Status page parsing (continent groups and their colos)
//! - Colo label splitting (`"<Place> - (<IATA>)"`)
//! - Locations feed decoding

mod locations;
mod site;
mod status_page;

// Re-export public API
pub use locations::decode_locations;
pub use site::split_site_label;
pub use status_page::{parse_status_page, StatusPage};
