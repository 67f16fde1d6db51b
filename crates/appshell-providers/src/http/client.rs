//! Reqwest-backed HTTP client
//!
//! Implements the `HttpClient` port on top of a pooled reqwest client and
//! feeds the network-status stream from observed request outcomes: a
//! completed request marks the network reachable, a connect failure or
//! timeout marks it unreachable.

use appshell_domain::error::{Error, Result};
use appshell_domain::ports::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use appshell_domain::sync::StateCell;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// HTTP client configuration
///
/// Controls connection pooling, timeouts, and the user agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// TCP keep-alive duration
    pub keepalive: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            keepalive: Duration::from_secs(60),
            timeout: Duration::from_secs(30),
            user_agent: format!("appshell/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }
}

/// HTTP client backed by a pooled reqwest client
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    config: HttpClientConfig,
    network: StateCell<bool>,
}

impl ReqwestHttpClient {
    /// Build a client from the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .tcp_keepalive(config.keepalive)
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            config,
            // assume reachable until a request proves otherwise
            network: StateCell::new(true),
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for ReqwestHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestHttpClient")
            .field("config", &self.config)
            .field("network_available", &self.network.get())
            .finish()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        };
        debug!(method = request.method.as_str(), url = %request.url, "HTTP request");

        let mut builder = self.client.request(method, request.url.as_str());
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        match builder.send().await {
            Ok(response) => {
                self.network.publish(true);
                let status = response.status().as_u16();
                let headers = response
                    .headers()
                    .iter()
                    .map(|(name, value)| {
                        (
                            name.to_string(),
                            String::from_utf8_lossy(value.as_bytes()).into_owned(),
                        )
                    })
                    .collect();
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| Error::network_with_source("Failed to read response body", e))?
                    .to_vec();
                Ok(HttpResponse {
                    status,
                    headers,
                    body,
                })
            }
            Err(e) if e.is_timeout() => {
                self.network.publish(false);
                Err(Error::timeout(format!(
                    "{} {}",
                    request.method.as_str(),
                    request.url
                )))
            }
            Err(e) if e.is_builder() => Err(Error::invalid_argument(format!(
                "invalid request for '{}': {}",
                request.url, e
            ))),
            Err(e) => {
                if e.is_connect() {
                    self.network.publish(false);
                }
                Err(Error::network_with_source(
                    format!("{} {} failed", request.method.as_str(), request.url),
                    e,
                ))
            }
        }
    }

    fn network_status(&self) -> watch::Receiver<bool> {
        self.network.subscribe()
    }
}
