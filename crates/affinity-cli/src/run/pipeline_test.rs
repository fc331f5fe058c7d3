//! End-to-end pipeline tests against wiremock Places/Translate servers.

use std::path::{Path, PathBuf};

use affinity_core::PipelineMode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("affinity-run-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn write(&self, name: &str, content: &str) {
        std::fs::write(self.path(name), content).expect("write fixture");
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.dir).ok();
    }
}

fn test_config(scratch: &Scratch, server: &MockServer, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        google_api_key: api_key.map(str::to_string),
        log_level: "debug".to_string(),
        mode: PipelineMode::Basic,
        brand_keywords: vec!["Aura".to_string()],
        city_list_path: scratch.path("city-list.txt"),
        locklist_path: scratch.path("locklist.csv"),
        output_path: scratch.path("aura-affinity.csv"),
        timestamp_path: scratch.path("last-run.txt"),
        places_base_url: server.uri(),
        translate_base_url: format!("{}/translate", server.uri()),
        request_timeout_secs: 5,
        user_agent: "affinity-test/0.1".to_string(),
    }
}

async fn mount_search(server: &MockServer, query: &str, ids: &[&str]) {
    let results: Vec<_> = ids.iter().map(|id| json!({ "place_id": id })).collect();
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", query))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "OK", "results": results })),
        )
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, place_id: &str, result: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", place_id))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "OK", "result": result })),
        )
        .mount(server)
        .await;
}

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("output csv should exist");
    rdr.records()
        .map(|r| r.expect("valid row").iter().map(str::to_string).collect())
        .collect()
}

#[tokio::test]
async fn missing_credential_makes_no_calls_and_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let scratch = Scratch::new();
    scratch.write("city-list.txt", "Lisbon, Portugal\n");
    let config = test_config(&scratch, &server, None);

    let outcome = run_directory(&config).await.unwrap();

    assert_eq!(outcome, RunOutcome::MissingCredential);
    assert!(!config.output_path.exists());
    assert!(!config.timestamp_path.exists());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_locations_file_exits_without_timestamp() {
    let server = MockServer::start().await;
    let scratch = Scratch::new();
    let config = test_config(&scratch, &server, Some("test-key"));

    let outcome = run_directory(&config).await.unwrap();

    assert_eq!(outcome, RunOutcome::NoLocations);
    assert!(!config.timestamp_path.exists());
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn empty_result_set_writes_timestamp_but_no_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let scratch = Scratch::new();
    scratch.write("city-list.txt", "Lisbon, Portugal\n\nPorto, Portugal\n");
    let config = test_config(&scratch, &server, Some("test-key"));

    let outcome = run_directory(&config).await.unwrap();

    assert_eq!(outcome, RunOutcome::NoData);
    assert!(config.timestamp_path.exists());
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn basic_run_dedups_numbers_and_applies_locklist() {
    let server = MockServer::start().await;
    mount_search(&server, "business named Aura in Lisbon, Portugal", &["p1", "p2"]).await;
    mount_search(&server, "business named Aura in Porto, Portugal", &["p1", "p3"]).await;

    mount_detail(
        &server,
        "p1",
        json!({
            "place_id": "p1",
            "name": "Aura Design Hotel",
            "types": ["lodging"],
            "geometry": { "location": { "lat": 38.5, "lng": -9.25 } },
            "website": "https://hotel.aura.example",
            "international_phone_number": "+351 21 000 0000",
            "address_components": [
                { "long_name": "Lisbon", "types": ["locality"] },
                { "long_name": "Portugal", "types": ["country"] }
            ]
        }),
    )
    .await;
    mount_detail(
        &server,
        "p2",
        json!({ "place_id": "p2", "name": "Aura Yoga", "types": ["gym"] }),
    )
    .await;
    // p3 details fail and the place is skipped.
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "p3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scratch = Scratch::new();
    scratch.write("city-list.txt", "Lisbon, Portugal\nPorto, Portugal\n");
    scratch.write(
        "locklist.csv",
        "place_id,verified,email\np2,true,hi@yoga.example\nunknown,true,\n",
    );
    let config = test_config(&scratch, &server, Some("test-key"));

    let outcome = run_directory(&config).await.unwrap();
    assert_eq!(outcome, RunOutcome::Written { rows: 2 });
    assert!(config.timestamp_path.exists());

    let rows = read_csv(&config.output_path);
    assert_eq!(
        rows[0],
        [
            "id", "name", "category", "city", "country", "latitude", "longitude", "website",
            "email", "phone", "social", "verified"
        ]
    );
    assert_eq!(
        rows[1],
        [
            "1",
            "Aura Design Hotel",
            "Accommodation",
            "Lisbon",
            "Portugal",
            "38.5",
            "-9.25",
            "https://hotel.aura.example",
            "",
            "+351 21 000 0000",
            "",
            "False"
        ]
    );
    assert_eq!(
        rows[2],
        [
            "2",
            "Aura Yoga",
            "Health & Wellbeing",
            "",
            "",
            "",
            "",
            "",
            "hi@yoga.example",
            "",
            "",
            "True"
        ]
    );
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn missing_locklist_is_not_an_error() {
    let server = MockServer::start().await;
    mount_search(&server, "business named Aura in Lisbon, Portugal", &["p1"]).await;
    mount_detail(&server, "p1", json!({ "place_id": "p1", "name": "Aura Studio" })).await;

    let scratch = Scratch::new();
    scratch.write("city-list.txt", "Lisbon, Portugal\n");
    let config = test_config(&scratch, &server, Some("test-key"));

    let outcome = run_directory(&config).await.unwrap();

    assert_eq!(outcome, RunOutcome::Written { rows: 1 });
    let rows = read_csv(&config.output_path);
    assert_eq!(rows[1][2], "Creative Industries");
}

#[tokio::test]
async fn multilingual_run_searches_translated_terms_and_adds_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "translations": [{ "translatedText": "Áurea" }] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    mount_search(&server, "business named Aura in Madrid, Spain", &["p1"]).await;
    mount_search(&server, "business named Áurea in Madrid, Spain", &["p2", "p1"]).await;
    mount_search(&server, "business named Aura in Sevilla, Spain", &[]).await;
    mount_search(&server, "business named Áurea in Sevilla, Spain", &[]).await;

    mount_detail(
        &server,
        "p1",
        json!({ "place_id": "p1", "name": "Aura Spa", "reviews": [{ "text": "Muy bien" }] }),
    )
    .await;
    mount_detail(&server, "p2", json!({ "place_id": "p2", "name": "Áurea Crypto" })).await;

    let scratch = Scratch::new();
    scratch.write("city-list.txt", "Madrid, Spain\nSevilla, Spain\n");
    let mut config = test_config(&scratch, &server, Some("test-key"));
    config.mode = PipelineMode::Multilingual;

    let outcome = run_directory(&config).await.unwrap();
    assert_eq!(outcome, RunOutcome::Written { rows: 2 });

    let rows = read_csv(&config.output_path);
    assert_eq!(rows[0][11], "description");
    assert_eq!(rows[0][12], "verified");
    assert_eq!(rows[1][1], "Aura Spa");
    assert_eq!(rows[1][11], "Muy bien");
    assert_eq!(rows[2][1], "Áurea Crypto");
    assert_eq!(rows[2][2], "Blockchain");
    assert_eq!(rows[2][11], "");
}
