//! Geo-enrichment of status page colos.

use std::collections::HashMap;

use log::debug;

use crate::error_handling::{InfoType, ProcessingStats};
use crate::models::{GeoInfo, Location, Site};

/// Outcome of [`enrich_sites`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSummary {
    /// Colos that now carry coordinates.
    pub enriched: usize,
    /// Colos left without coordinates.
    pub without_location: usize,
    /// Locations whose IATA code matched no colo.
    pub unmatched_locations: usize,
}

/// Copies the geographic fields of each location onto the colo with the same
/// IATA code.
///
/// Name, continent and code are never touched. Locations with no matching
/// colo are dropped, and colos with no matching location keep no geo fields;
/// neither case is an error.
pub fn enrich_sites(
    sites: &mut HashMap<String, Site>,
    locations: &[Location],
    stats: &ProcessingStats,
) -> MergeSummary {
    let mut unmatched_locations = 0;

    for location in locations {
        match sites.get_mut(&location.iata) {
            Some(site) => site.geo = Some(GeoInfo::from(location)),
            None => {
                debug!("No colo for location {} ({})", location.iata, location.city);
                unmatched_locations += 1;
            }
        }
    }

    let enriched = sites.values().filter(|site| site.geo.is_some()).count();
    let summary = MergeSummary {
        enriched,
        without_location: sites.len() - enriched,
        unmatched_locations,
    };

    stats.add_info(InfoType::SiteEnriched, summary.enriched);
    stats.add_info(InfoType::SiteWithoutLocation, summary.without_location);
    stats.add_info(InfoType::LocationUnmatched, summary.unmatched_locations);

    summary
}
