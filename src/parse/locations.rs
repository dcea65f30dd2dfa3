//! Locations feed decoding.

use crate::error_handling::DecodeError;
use crate::models::Location;

/// Decodes the locations feed, a JSON array of location objects.
///
/// Coordinates are passed through as-is; no range checks are applied.
///
/// # Errors
///
/// Returns `DecodeError` on malformed JSON, a non-array document, or a field
/// of the wrong type.
pub fn decode_locations(json: &[u8]) -> Result<Vec<Location>, DecodeError> {
    let locations: Vec<Location> = serde_json::from_slice(json)?;
    log::debug!("Decoded {} locations", locations.len());
    Ok(locations)
}
