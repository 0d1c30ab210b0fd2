//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use carefind_core::{Coordinate, HospitalType};
use carefind_places::PlacesClient;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: Coordinate = Coordinate {
    latitude: 3.139_003,
    longitude: 101.686_855,
};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn place_json(place_id: &str, name: &str, types: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "place_id": place_id,
        "name": name,
        "vicinity": "Jalan Pahang, Kuala Lumpur, Wilayah Persekutuan",
        "geometry": { "location": { "lat": 3.1724, "lng": 101.7022 } },
        "types": types,
        "rating": 4.3,
        "business_status": "OPERATIONAL"
    })
}

fn ok_body(results: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({ "status": "OK", "results": results })
}

fn zero_results_body() -> serde_json::Value {
    serde_json::json!({ "status": "ZERO_RESULTS", "results": [] })
}

#[tokio::test]
async fn nearby_search_parses_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("type", "hospital"))
        .and(query_param("key", "test-key"))
        .and(query_param("radius", "5000"))
        .and(query_param("location", "3.139003,101.686855"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![place_json(
            "p1",
            "Hospital Kuala Lumpur",
            &["hospital", "point_of_interest"],
        )])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .nearby_search(ORIGIN, 5000, "hospital")
        .await
        .expect("should parse results");

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].place_id, "p1");
    assert_eq!(places[0].name, "Hospital Kuala Lumpur");
}

#[tokio::test]
async fn zero_results_is_empty_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(zero_results_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .nearby_search(ORIGIN, 5000, "clinic")
        .await
        .expect("ZERO_RESULTS should not be an error");
    assert!(places.is_empty());
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "results": [],
        "error_message": "The provided API key is invalid."
    });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .nearby_search(ORIGIN, 5000, "hospital")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("API key is invalid"), "got: {err}");
}

#[tokio::test]
async fn fetch_nearby_hospitals_dedups_across_categories() {
    let server = MockServer::start().await;

    // The same place appears under both "hospital" and "health".
    let shared = place_json("dup-1", "Shared Facility", &["hospital"]);
    Mock::given(method("GET"))
        .and(query_param("type", "hospital"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![shared.clone()])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("type", "health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![shared])))
        .mount(&server)
        .await;
    for category in ["doctor", "clinic"] {
        Mock::given(method("GET"))
            .and(query_param("type", category))
            .respond_with(ResponseTemplate::new(200).set_body_json(zero_results_body()))
            .mount(&server)
            .await;
    }

    let client = test_client(&server.uri());
    let records = client.fetch_nearby_hospitals(ORIGIN, 5000).await;

    assert_eq!(records.len(), 1, "duplicate place_id must collapse to one record");
    assert_eq!(records[0].id, "external:dup-1");
}

#[tokio::test]
async fn fetch_nearby_hospitals_skips_permanently_closed() {
    let server = MockServer::start().await;

    let mut closed = place_json("gone", "Closed Clinic", &["clinic"]);
    closed["business_status"] = serde_json::json!("CLOSED_PERMANENTLY");
    Mock::given(method("GET"))
        .and(query_param("type", "hospital"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![
            closed,
            place_json("open", "Open Hospital", &["hospital"]),
        ])))
        .mount(&server)
        .await;
    for category in ["health", "doctor", "clinic"] {
        Mock::given(method("GET"))
            .and(query_param("type", category))
            .respond_with(ResponseTemplate::new(200).set_body_json(zero_results_body()))
            .mount(&server)
            .await;
    }

    let client = test_client(&server.uri());
    let records = client.fetch_nearby_hospitals(ORIGIN, 5000).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "external:open");
}

#[tokio::test]
async fn fetch_nearby_hospitals_absorbs_per_category_failures() {
    let server = MockServer::start().await;

    // "hospital" blows up with a 500; the remaining categories still run.
    Mock::given(method("GET"))
        .and(query_param("type", "hospital"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("type", "health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![place_json(
            "h-only",
            "Health Facility",
            &["health"],
        )])))
        .mount(&server)
        .await;
    for category in ["doctor", "clinic"] {
        Mock::given(method("GET"))
            .and(query_param("type", category))
            .respond_with(ResponseTemplate::new(200).set_body_json(zero_results_body()))
            .mount(&server)
            .await;
    }

    let client = test_client(&server.uri());
    let records = client.fetch_nearby_hospitals(ORIGIN, 5000).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "external:h-only");
}

#[tokio::test]
async fn fetch_nearby_hospitals_total_failure_yields_empty_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch_nearby_hospitals(ORIGIN, 5000).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn search_nearby_normalizes_and_filters_closed() {
    let server = MockServer::start().await;

    let mut closed = place_json("x", "Gone", &["doctor"]);
    closed["business_status"] = serde_json::json!("CLOSED_PERMANENTLY");
    Mock::given(method("GET"))
        .and(query_param("keyword", "emergency"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![
            place_json("kw-1", "Emergency Ward", &["hospital"]),
            closed,
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .search_nearby(ORIGIN, "emergency", 5000)
        .await
        .expect("keyword search should succeed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Emergency Ward");
    assert_eq!(records[0].hospital_type, HospitalType::Government);
}
