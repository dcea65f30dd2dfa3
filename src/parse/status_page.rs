//! Status page parsing.
//!
//! The status page lists one top-level component per continent. Each one
//! nests a child component per colo whose name reads
//! `"<Place> - (<IATA>)"`.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

use crate::config::{
    CHILD_NAME_SELECTOR, COMPONENT_CONTAINER_SELECTOR, CONTINENT_NAME_SELECTOR, EXCLUDED_GROUP,
};
use crate::error_handling::{InfoType, ParseWarning, ProcessingStats};
use crate::models::Site;
use crate::parse::split_site_label;
use crate::utils::parse_selector_unsafe;

static COMPONENT_CONTAINER: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(COMPONENT_CONTAINER_SELECTOR, "COMPONENT_CONTAINER")
});
static CONTINENT_NAME: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CONTINENT_NAME_SELECTOR, "CONTINENT_NAME"));
static CHILD_NAME: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CHILD_NAME_SELECTOR, "CHILD_NAME"));

/// Colos found on the status page, keyed by IATA code.
///
/// `warnings` lists every entry that could not be read. They are diagnostic;
/// `sites` is usable either way.
#[derive(Debug, Default)]
pub struct StatusPage {
    /// Colos keyed by IATA code.
    pub sites: HashMap<String, Site>,
    /// Entries skipped or degraded while parsing, in page order.
    pub warnings: Vec<ParseWarning>,
}

/// Parses the status page HTML into colos.
///
/// - The `"Cloudflare Sites and Services"` group is skipped entirely.
/// - A group without a continent label records a warning; its colos are still
///   collected with an empty continent.
/// - A colo label that does not split records a warning and is skipped.
/// - A repeated IATA code replaces the earlier entry.
pub fn parse_status_page(html: &[u8], stats: &ProcessingStats) -> StatusPage {
    let document = Html::parse_document(&String::from_utf8_lossy(html));
    let mut page = StatusPage::default();

    for (group, container) in document.select(&COMPONENT_CONTAINER).enumerate() {
        let continent = continent_label(&container);

        if continent == EXCLUDED_GROUP {
            debug!("Skipping group {:?}", EXCLUDED_GROUP);
            continue;
        }
        if continent.is_empty() {
            page.record(ParseWarning::EmptyContinent { group }, stats);
        }

        for name_node in container.select(&CHILD_NAME) {
            let raw = name_node.text().collect::<String>();
            let raw = raw.trim();

            let Some((name, code)) = split_site_label(raw) else {
                page.record(
                    ParseWarning::MalformedSite {
                        raw: raw.to_string(),
                    },
                    stats,
                );
                continue;
            };

            let site = Site::new(name, code.clone(), continent.clone());
            if let Some(previous) = page.sites.insert(code, site) {
                debug!(
                    "Duplicate IATA code {}: replacing {:?} ({})",
                    previous.code, previous.name, previous.continent
                );
                stats.increment_info(InfoType::DuplicateCode);
            }
        }
    }

    page
}

impl StatusPage {
    fn record(&mut self, warning: ParseWarning, stats: &ProcessingStats) {
        warn!("{}", warning);
        stats.increment_warning(warning.warning_type());
        self.warnings.push(warning);
    }
}

/// Text of the group's name span, minus the small-font child count.
fn continent_label(container: &ElementRef) -> String {
    container
        .select(&CONTINENT_NAME)
        .flat_map(|span| span.text())
        .collect::<String>()
        .trim()
        .to_string()
}
