//! End-to-end tests for run_export
//!
//! Both sources are served by a wiremock server; the colo map is written to a
//! temporary directory and read back.

use colo_map::{run_export, Config, FailOn, LogFormat, LogLevel};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUS_PATH: &str = "/status";
const LOCATIONS_PATH: &str = "/locations";
const TEST_USER_AGENT: &str = "colo_map_test/1.0";

/// One continent group with the live page's component markup.
fn group(continent: &str, sites: &[&str]) -> String {
    let children: String = sites
        .iter()
        .map(|site| {
            format!(
                r#"<div class="component-inner-container status-green">
                    <span class="name">{}</span>
                    <span class="component-status">Operational</span>
                </div>"#,
                site
            )
        })
        .collect();

    format!(
        r#"<div class="component-container border-color is-group">
            <div class="component-inner-container status-green">
                <span class="name">
                    <span>{}</span>
                    <span class="font-small"> (<span class="js-children-count">{}</span> components)</span>
                </span>
            </div>
            <div class="child-components-container">{}</div>
        </div>"#,
        continent,
        sites.len(),
        children
    )
}

fn status_page(groups: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Cloudflare Status</title></head><body>
        <div class="components-container one-column">{}</div>
        </body></html>"#,
        groups.concat()
    )
}

/// Mounts both endpoints on a fresh mock server.
async fn start_sources(status_html: String, locations: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(status_html))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(LOCATIONS_PATH))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(locations)
        .mount(&server)
        .await;
    server
}

fn test_config(server: &MockServer, output: PathBuf) -> Config {
    Config {
        output,
        status_url: format!("{}{}", server.uri(), STATUS_PATH),
        locations_url: format!("{}{}", server.uri(), LOCATIONS_PATH),
        user_agent: TEST_USER_AGENT.to_string(),
        timeout_seconds: 5,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        fail_on: FailOn::Never,
    }
}

fn read_output(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("output file should exist");
    serde_json::from_str(&text).expect("output should be valid JSON")
}

#[tokio::test]
async fn test_single_enriched_colo() {
    let server = start_sources(
        status_page(&[group("Asia", &["Beihai, China - (BHY)"])]),
        ResponseTemplate::new(200).set_body_string(
            r#"[{"iata":"BHY","lat":21.48,"lon":109.12,"cca2":"CN","region":"Asia","city":"Beihai"}]"#,
        ),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");

    let report = run_export(test_config(&server, output.clone()))
        .await
        .expect("export should succeed");

    assert_eq!(
        read_output(&output),
        json!([{
            "name": "Beihai, China",
            "continent": "Asia",
            "iata": "BHY",
            "lat": 21.48,
            "lon": 109.12,
            "cca2": "CN",
            "region": "Asia",
            "city": "Beihai"
        }])
    );
    assert_eq!(report.total_sites, 1);
    assert_eq!(report.enriched_sites, 1);
    assert_eq!(report.unmatched_locations, 0);
    assert_eq!(report.warnings, 0);
    assert_eq!(report.output_path, output);
}

#[tokio::test]
async fn test_colo_without_location_has_no_geo_fields() {
    let server = start_sources(
        status_page(&[group("Europe", &["Cork, Ireland - (ORK)"])]),
        ResponseTemplate::new(200).set_body_string(
            r#"[{"iata":"TIA","lat":41.41,"lon":19.72,"cca2":"AL","region":"Europe","city":"Tirana"}]"#,
        ),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");

    let report = run_export(test_config(&server, output.clone()))
        .await
        .unwrap();

    assert_eq!(
        read_output(&output),
        json!([{"name": "Cork, Ireland", "continent": "Europe", "iata": "ORK"}])
    );
    assert_eq!(report.enriched_sites, 0);
    assert_eq!(report.unmatched_locations, 1);
}

#[tokio::test]
async fn test_output_is_sorted_and_excludes_services_group() {
    let server = start_sources(
        status_page(&[
            group("Europe", &["Tirana, Albania - (TIA)", "Cork, Ireland - (ORK)"]),
            group("Cloudflare Sites and Services", &["CDN/Cache - (CDN)"]),
            group("Asia", &["Singapore, Singapore - (SIN)", "Beihai, China - (BHY)"]),
            group("Africa", &["Antananarivo, Madagascar - (TNR)"]),
        ]),
        ResponseTemplate::new(200).set_body_string("[]"),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");

    run_export(test_config(&server, output.clone())).await.unwrap();

    let colos = read_output(&output);
    let codes: Vec<&str> = colos
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["iata"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["TNR", "BHY", "SIN", "ORK", "TIA"]);
}

#[tokio::test]
async fn test_output_is_two_space_indented() {
    let server = start_sources(
        status_page(&[group("Asia", &["Beihai, China - (BHY)"])]),
        ResponseTemplate::new(200).set_body_string("[]"),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");

    run_export(test_config(&server, output.clone())).await.unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "[\n  {\n    \"name\": \"Beihai, China\",\n    \"continent\": \"Asia\",\n    \"iata\": \"BHY\"\n  }\n]\n"
    );
}

#[tokio::test]
async fn test_status_page_error_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");

    let err = run_export(test_config(&server, output.clone()))
        .await
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("Failed to fetch status page"), "{}", message);
    assert!(message.contains("500"), "{}", message);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_malformed_locations_leaves_existing_output_untouched() {
    let server = start_sources(
        status_page(&[group("Asia", &["Beihai, China - (BHY)"])]),
        ResponseTemplate::new(200).set_body_string(r#"[{"iata": "BHY", "lat": "#),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");
    std::fs::write(&output, "previous run").unwrap();

    let err = run_export(test_config(&server, output.clone()))
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("Failed to decode locations feed"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous run");
}

#[tokio::test]
async fn test_locations_non_200_is_fatal() {
    let server = start_sources(
        status_page(&[group("Asia", &["Beihai, China - (BHY)"])]),
        ResponseTemplate::new(404),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");

    let err = run_export(test_config(&server, output.clone()))
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("Failed to fetch locations feed"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_warnings_are_non_fatal_by_default() {
    let server = start_sources(
        status_page(&[group("Asia", &["Beihai, China - (BHY)", "Not a colo label"])]),
        ResponseTemplate::new(200).set_body_string("[]"),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");

    let report = run_export(test_config(&server, output.clone()))
        .await
        .unwrap();

    assert_eq!(report.warnings, 1);
    assert_eq!(report.total_sites, 1);
    assert_eq!(read_output(&output).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_fail_on_any_warning_aborts_before_writing() {
    let server = start_sources(
        status_page(&[group("Asia", &["Beihai, China - (BHY)", "Not a colo label"])]),
        ResponseTemplate::new(200).set_body_string("[]"),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("colos.json");
    let config = Config {
        fail_on: FailOn::AnyWarning,
        ..test_config(&server, output.clone())
    };

    let err = run_export(config).await.unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("1 warning"), "{}", message);
    assert!(message.contains("Not a colo label"), "{}", message);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let server = start_sources(
        status_page(&[group("Asia", &["Beihai, China - (BHY)"])]),
        ResponseTemplate::new(200).set_body_string("[]"),
    )
    .await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("no_such_dir").join("colos.json");

    let err = run_export(test_config(&server, output)).await.unwrap_err();

    assert!(format!("{:#}", err).contains("Failed to write colo map"));
}
