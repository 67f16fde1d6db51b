//! Null HTTP client for testing
//!
//! Answers every request with an empty `204 No Content` response and reports
//! the network as always reachable. Useful for wiring the application core
//! in tests without network access.

use appshell_domain::error::Result;
use appshell_domain::ports::{HttpClient, HttpRequest, HttpResponse};
use appshell_domain::sync::StateCell;
use async_trait::async_trait;
use tokio::sync::watch;

/// HTTP client that performs no I/O
#[derive(Debug)]
pub struct NullHttpClient {
    network: StateCell<bool>,
}

impl NullHttpClient {
    /// Create a new null client
    pub fn new() -> Self {
        Self {
            network: StateCell::new(true),
        }
    }
}

impl Default for NullHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for NullHttpClient {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse> {
        Ok(HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: Vec::new(),
        })
    }

    fn network_status(&self) -> watch::Receiver<bool> {
        self.network.subscribe()
    }
}
