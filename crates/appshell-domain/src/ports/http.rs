//! HTTP Client Port
//!
//! Contract for the HTTP wrapper consumed by application services. The port
//! stays transport-agnostic: requests and responses are plain value types,
//! and the concrete client (reqwest-backed in `appshell-providers`) is
//! injected through the service registry.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::watch;

/// HTTP request method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// An HTTP request to execute
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request method
    pub method: HttpMethod,
    /// Absolute request URL
    pub url: String,
    /// Optional JSON body (sent with `Content-Type: application/json`)
    pub body: Option<String>,
    /// Per-request timeout override; the client default applies when `None`
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Create a request with no body and the client's default timeout
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            timeout: None,
        }
    }

    /// Set a JSON body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// An HTTP response: status, headers, and the collected body
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code (e.g. 200)
    pub status: u16,
    /// Response headers in arrival order
    pub headers: Vec<(String, String)>,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value with the given name, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP client interface
///
/// Implementations must be `Send + Sync`; one client is shared by every
/// service that talks to the network.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute a request, honoring its timeout override
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Replay-latest stream of network reachability
    ///
    /// New subscribers immediately observe the current state.
    fn network_status(&self) -> watch::Receiver<bool>;

    /// Snapshot of network reachability
    fn is_network_available(&self) -> bool {
        *self.network_status().borrow()
    }

    /// GET a URL
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.execute(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// PUT a JSON body to a URL
    async fn put(&self, url: &str, json_body: &str) -> Result<HttpResponse> {
        self.execute(HttpRequest::new(HttpMethod::Put, url).with_body(json_body))
            .await
    }

    /// POST a JSON body to a URL
    async fn post(&self, url: &str, json_body: &str) -> Result<HttpResponse> {
        self.execute(HttpRequest::new(HttpMethod::Post, url).with_body(json_body))
            .await
    }

    /// DELETE a URL
    async fn delete(&self, url: &str) -> Result<HttpResponse> {
        self.execute(HttpRequest::new(HttpMethod::Delete, url))
            .await
    }

    /// GET a URL and return the body bytes
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        Ok(response.body)
    }
}
