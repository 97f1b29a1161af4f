//! Integration tests for `CatalogClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_catalog::{CatalogClient, CatalogError};

/// Builds a `CatalogClient` suitable for tests: 5-second timeout, descriptive UA.
fn test_client() -> CatalogClient {
    CatalogClient::new(5, "vitrine-test/0.1").expect("failed to build test CatalogClient")
}

fn stocks_url(server: &MockServer) -> String {
    format!("{}/stocks.json", server.uri())
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_catalog_normalizes_every_entry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stocks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Bougie", "price": 12, "images": ["b.jpg"], "category": "maison"},
            {"titre": "Carnet", "prix": "6.5", "stock": false},
            {}
        ])))
        .mount(&server)
        .await;

    let products = test_client()
        .fetch_catalog(&stocks_url(&server))
        .await
        .expect("expected Ok");

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].name, "Bougie");
    assert_eq!(products[0].images, vec!["b.jpg"]);
    assert_eq!(products[1].name, "Carnet");
    assert!(products[1].is_out_of_stock());
    assert_eq!(products[2].name, "Article");
}

#[tokio::test]
async fn fetch_catalog_non_array_payload_is_empty_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stocks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .mount(&server)
        .await;

    let result = test_client().fetch_catalog(&stocks_url(&server)).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_payload_sends_no_cache_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stocks.json"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let payload = test_client()
        .fetch_payload(&stocks_url(&server))
        .await
        .expect("expected Ok");
    assert_eq!(payload, json!([]));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_catalog_non_success_status_is_error_and_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stocks.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_catalog(&stocks_url(&server))
        .await
        .expect_err("expected an error");

    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_invalid_json_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stocks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_catalog(&stocks_url(&server))
        .await
        .expect_err("expected an error");

    assert!(
        matches!(err, CatalogError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_connection_refused_is_http_error() {
    // Nothing listens on port 1 of the loopback interface.
    let err = test_client()
        .fetch_catalog("http://127.0.0.1:1/stocks.json")
        .await
        .expect_err("expected an error");

    assert!(
        matches!(err, CatalogError::Http(_)),
        "expected Http, got: {err:?}"
    );
}
