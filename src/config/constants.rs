//! Configuration constants.
//!
//! This module defines the fixed source URLs, request identity and other
//! defaults used throughout the application.

/// Status page listing every colo grouped by continent.
pub const STATUS_PAGE_URL: &str = "https://www.cloudflarestatus.com/";

/// JSON feed with the coordinates of each colo, keyed by IATA code.
pub const LOCATIONS_URL: &str = "https://speed.cloudflare.com/locations";

/// User-Agent header sent with every request.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "my little scraper";

/// Default path of the generated colo map.
pub const DEFAULT_OUTPUT_PATH: &str = "colos.json";

/// Per-request timeout in seconds.
///
/// This is the only deadline applied to the two fetches; there are no retries.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Status page group that lists services rather than locations.
///
/// Sites under this group are never written to the output.
pub const EXCLUDED_GROUP: &str = "Cloudflare Sites and Services";

// Status page selectors
/// Top-level component: one per continent.
pub const COMPONENT_CONTAINER_SELECTOR: &str = "div.component-container";
/// Continent label, without the small-font status span that follows it.
pub const CONTINENT_NAME_SELECTOR: &str =
    "div.component-inner-container > span.name > span:not(.font-small)";
/// Name node of each colo nested under a continent.
pub const CHILD_NAME_SELECTOR: &str =
    "div.child-components-container > div.component-inner-container > span.name";

/// Pattern for `"<Place Name> - (<IATA>)"` colo labels.
///
/// The status page sometimes carries stray bytes (e.g. a mis-decoded
/// non-breaking space) between the dash and the parenthesis.
pub const SITE_PATTERN: &str = r"^(.*?)\s+-[^(]*\(([^)]+)\)$";

/// The only status accepted from either source.
pub const HTTP_STATUS_OK: u16 = 200;
