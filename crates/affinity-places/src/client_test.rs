use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::search_all::MAX_PAGES;
use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "affinity-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_joins_endpoint_onto_base_path() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    let url = client
        .build_url("details/json", &[("place_id", "abc")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/details/json?place_id=abc&key=test-key"
    );
}

#[test]
fn build_url_tolerates_trailing_slash() {
    let client = test_client("https://maps.googleapis.com/maps/api/place/");
    let url = client
        .build_url("textsearch/json", &[("pagetoken", "TOKEN")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/textsearch/json?pagetoken=TOKEN&key=test-key"
    );
}

#[test]
fn build_url_encodes_query_text() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    let url = client
        .build_url(
            "textsearch/json",
            &[("query", "business named Aura in Lisbon, Portugal")],
        )
        .unwrap();
    assert!(
        url.as_str()
            .contains("query=business+named+Aura+in+Lisbon%2C+Portugal"),
        "query param should be form-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 30, "ua", "not a url");
    assert!(
        matches!(result, Err(PlacesError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn empty_json_detection() {
    assert!(is_empty_json(&serde_json::Value::Null));
    assert!(is_empty_json(&serde_json::json!({})));
    assert!(!is_empty_json(&serde_json::json!({ "name": "x" })));
}

#[tokio::test]
async fn text_search_all_stops_at_page_cap_when_token_never_runs_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{ "place_id": "loop" }],
            "next_page_token": "SAME"
        })))
        .expect(20)
        .mount(&server)
        .await;

    let client = test_client(&server.uri()).with_page_token_delay(Duration::ZERO);
    let search = client.text_search_all("business named Aura in Lisbon").await;

    assert_eq!(MAX_PAGES, 20);
    assert!(search.error.is_none(), "unexpected error: {:?}", search.error);
    assert_eq!(search.pages, MAX_PAGES);
    assert_eq!(search.places.len(), MAX_PAGES);
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), MAX_PAGES);
}

#[test]
fn production_client_waits_the_fixed_token_delay() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    assert_eq!(client.page_token_delay, PAGE_TOKEN_DELAY);
    assert_eq!(PAGE_TOKEN_DELAY, Duration::from_secs(2));
}
