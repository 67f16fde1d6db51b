//! HTTP client implementations

mod client;
mod null;

pub use client::{HttpClientConfig, ReqwestHttpClient};
pub use null::NullHttpClient;
