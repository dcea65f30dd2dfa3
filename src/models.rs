//! Colo and location records.

use serde::{Deserialize, Serialize};

/// One entry of the locations feed.
///
/// Unknown fields are ignored. `cca2`, `region` and `city` default to empty
/// strings when absent; `iata`, `lat` and `lon` are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    /// IATA code used as the join key.
    pub iata: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default)]
    pub cca2: String,
    /// Region label, e.g. `"Europe"`.
    #[serde(default)]
    pub region: String,
    /// City name.
    #[serde(default)]
    pub city: String,
}

/// Geographic fields merged into a [`Site`] from a [`Location`].
///
/// Kept as one value so a site carries either all of them or none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoInfo {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Country code.
    pub cca2: String,
    /// Region label.
    pub region: String,
    /// City name.
    pub city: String,
}

impl From<&Location> for GeoInfo {
    fn from(location: &Location) -> Self {
        Self {
            lat: location.lat,
            lon: location.lon,
            cca2: location.cca2.clone(),
            region: location.region.clone(),
            city: location.city.clone(),
        }
    }
}

/// A colo as listed on the status page, optionally enriched with its location.
///
/// Serializes as `name`, `continent`, `iata`, then the geographic fields only
/// when present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    /// Place name, e.g. `"Beihai, China"`.
    pub name: String,
    /// Continent group the colo was listed under.
    pub continent: String,
    /// IATA code.
    #[serde(rename = "iata")]
    pub code: String,
    /// Coordinates and place data, once merged.
    #[serde(flatten)]
    pub geo: Option<GeoInfo>,
}

impl Site {
    /// A colo with no geographic data yet.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            continent: continent.into(),
            code: code.into(),
            geo: None,
        }
    }
}
