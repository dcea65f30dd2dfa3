//! Colo map export.
//!
//! Orders the merged colos and writes them as an indented JSON array.

use std::collections::HashMap;
use std::path::Path;

use crate::error_handling::ExportError;
use crate::models::Site;

/// Sorts colos by continent, then name (byte-wise, no locale folding).
///
/// Ties on both fall back to the IATA code so repeated runs produce identical
/// files.
pub fn sort_sites(sites: HashMap<String, Site>) -> Vec<Site> {
    let mut sorted: Vec<Site> = sites.into_values().collect();
    sorted.sort_by(|a, b| {
        a.continent
            .cmp(&b.continent)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.code.cmp(&b.code))
    });
    sorted
}

/// Renders colos as a two-space indented JSON array with a trailing newline.
pub fn render_sites_json(sites: &[Site]) -> Result<Vec<u8>, ExportError> {
    let mut json = serde_json::to_vec_pretty(sites)?;
    json.push(b'\n');
    Ok(json)
}

/// Writes colos to `path`, creating or truncating the file.
///
/// The JSON is rendered before the file is opened, so a serialization failure
/// leaves any existing file untouched.
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be written.
pub async fn write_sites_json(sites: &[Site], path: &Path) -> Result<(), ExportError> {
    let json = render_sites_json(sites)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Wrote {} colos to {}", sites.len(), path.display());
    Ok(())
}
