//! Integration tests for the lookup client against a mock HTTP server.
//!
//! These verify endpoint selection (self-lookup vs per-IP), the error
//! taxonomy (404 vs other statuses vs transport failures), response parsing,
//! and token forwarding.

use std::sync::Arc;

use ip_status::{LookupClient, LookupError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lookup_client(base: &str, token: Option<&str>) -> LookupClient {
    LookupClient::new(
        Arc::new(reqwest::Client::new()),
        base.to_string(),
        token.map(str::to_string),
    )
}

#[tokio::test]
async fn test_fetch_per_ip_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/8.8.8.8/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "8.8.8.8",
            "hostname": "dns.google",
            "city": "Mountain View",
            "region": "California",
            "country": "US",
            "loc": "37.751,-97.822",
            "org": "AS15169 Google LLC",
            "postal": "94043",
            "timezone": "America/Los_Angeles"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), None);
    let result = client.fetch(Some("8.8.8.8")).await.expect("lookup should succeed");

    assert_eq!(result.ip.as_deref(), Some("8.8.8.8"));
    assert_eq!(result.coordinates(), Some((37.751, -97.822)));
    assert_eq!(
        result.location_summary(),
        "Mountain View, California, US"
    );
}

#[tokio::test]
async fn test_fetch_none_takes_self_lookup_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "203.0.113.7" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), None);
    let result = client.fetch(None).await.expect("self-lookup should succeed");
    assert_eq!(result.ip.as_deref(), Some("203.0.113.7"));
}

#[tokio::test]
async fn test_fetch_blank_input_takes_self_lookup_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "203.0.113.7" })))
        .expect(2)
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), None);
    client.fetch(Some("")).await.expect("empty input should self-lookup");
    client.fetch(Some("   \t")).await.expect("blank input should self-lookup");
}

#[tokio::test]
async fn test_fetch_404_names_attempted_ip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/203.0.113.9/json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), None);
    let error = client
        .fetch(Some("203.0.113.9"))
        .await
        .expect_err("404 should be an error");

    match &error {
        LookupError::NotFound { ip } => assert_eq!(ip, "203.0.113.9"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(error.to_string().contains("203.0.113.9"));
}

#[tokio::test]
async fn test_fetch_404_self_lookup_uses_seu_ip_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), None);
    let error = client.fetch(None).await.expect_err("404 should be an error");
    assert!(error.to_string().contains("seu IP"));
}

#[tokio::test]
async fn test_fetch_other_status_carries_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), None);
    let error = client.fetch(None).await.expect_err("500 should be an error");
    match &error {
        LookupError::Http { status } => assert_eq!(*status, 500),
        other => panic!("expected Http, got {:?}", other),
    }
    assert!(error.to_string().contains("500"));
}

#[tokio::test]
async fn test_fetch_transport_error() {
    // Nothing listens on this port; the request fails below HTTP.
    let client = lookup_client("http://127.0.0.1:1", None);
    let error = client.fetch(None).await.expect_err("connection should fail");
    assert!(matches!(error, LookupError::Transport(_)));
}

#[tokio::test]
async fn test_fetch_invalid_ip_falls_back_to_self_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "203.0.113.7" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), None);
    // An unvalidated string never lands in the URL path
    client
        .fetch(Some("999.1.1.1"))
        .await
        .expect("should fall back to self-lookup endpoint");
}

#[tokio::test]
async fn test_fetch_appends_token_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/8.8.8.8/json"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "8.8.8.8" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), Some("test-token"));
    client.fetch(Some("8.8.8.8")).await.expect("token lookup should succeed");
}

#[tokio::test]
async fn test_fetch_sparse_response_leaves_fields_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "203.0.113.7",
            "bogon": true
        })))
        .mount(&server)
        .await;

    let client = lookup_client(&server.uri(), None);
    let result = client.fetch(None).await.expect("lookup should succeed");
    assert_eq!(result.coordinates(), None);
    assert_eq!(result.location_summary(), "");
    assert!(result.city.is_none());
}
