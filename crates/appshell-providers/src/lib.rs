//! # appshell-providers
//!
//! Adapter implementations for the appshell ports. Each provider implements
//! a port (trait) defined in `appshell-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Storage | `StorageProvider` | Local (filesystem), Memory |
//! | HTTP | `HttpClient` | Reqwest, Null |
//! | Global store | `GlobalStore` | File, Memory |
//!
//! The memory and null variants exist for tests and for running without a
//! real backing platform.

pub mod http;
pub mod state;
pub mod storage;

// Re-export domain types commonly used with providers
pub use appshell_domain::error::{Error, Result};

pub use http::{HttpClientConfig, NullHttpClient, ReqwestHttpClient};
pub use state::{FileGlobalStore, MemoryGlobalStore};
pub use storage::{LocalStorageProvider, MemoryStorageProvider};
