//! HTTP client wrapper tests
//!
//! Transport behavior is reqwest's business; these tests cover the wrapper
//! types, the null client, and the network-status stream shape.

use appshell_domain::ports::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use appshell_providers::{HttpClientConfig, NullHttpClient, ReqwestHttpClient};
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_idle_per_host, 10);
    assert!(config.user_agent.starts_with("appshell/"));
}

#[test]
fn test_config_with_timeout() {
    let config = HttpClientConfig::with_timeout(Duration::from_secs(5));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.max_idle_per_host, 10);
}

#[test]
fn test_request_builder() {
    let request = HttpRequest::new(HttpMethod::Post, "https://example.com/api")
        .with_body("{\"a\":1}")
        .with_timeout(Duration::from_secs(2));
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.body.as_deref(), Some("{\"a\":1}"));
    assert_eq!(request.timeout, Some(Duration::from_secs(2)));
    assert_eq!(request.method.as_str(), "POST");
}

#[test]
fn test_response_helpers() {
    let response = HttpResponse {
        status: 200,
        headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        body: b"{\"ok\":true}".to_vec(),
    };
    assert!(response.is_success());
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(response.header("x-missing"), None);
    assert_eq!(response.text(), "{\"ok\":true}");

    let failure = HttpResponse {
        status: 404,
        headers: Vec::new(),
        body: Vec::new(),
    };
    assert!(!failure.is_success());
}

#[tokio::test]
async fn test_null_client_answers_everything() {
    let client = NullHttpClient::new();

    let response = client.get("https://example.com").await.unwrap();
    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());

    let response = client.post("https://example.com", "{}").await.unwrap();
    assert_eq!(response.status, 204);

    assert!(client.is_network_available());
    let rx = client.network_status();
    assert!(*rx.borrow());
}

#[tokio::test]
async fn test_reqwest_client_builds_and_reports_network_up() {
    let client = ReqwestHttpClient::new(HttpClientConfig::default()).unwrap();
    assert!(client.is_network_available());
    assert_eq!(client.config().timeout, Duration::from_secs(30));
}

#[tokio::test]
async fn test_download_returns_body_bytes() {
    let client = NullHttpClient::new();
    let bytes = client.download("https://example.com/file").await.unwrap();
    assert!(bytes.is_empty());
}
