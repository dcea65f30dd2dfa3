//! Live test against the real status page.
//!
//! Needs network access. Run manually with:
//! `cargo test --test live_status_page -- --ignored`

use colo_map::initialization::init_client;
use colo_map::{fetch_page, parse_status_page, Config, ProcessingStats};

#[tokio::test]
#[ignore]
async fn test_live_status_page_contains_beihai() {
    let config = Config::default();
    let client = init_client(&config).expect("client should build");

    let body = fetch_page(&client, &config.status_url)
        .await
        .expect("failed to fetch status page");
    let parsed = parse_status_page(&body, &ProcessingStats::new());

    let colo = parsed
        .sites
        .get("BHY")
        .expect("colo BHY was not found in map");
    assert_eq!(colo.name, "Beihai, China");
    assert_eq!(colo.continent, "Asia");
}
