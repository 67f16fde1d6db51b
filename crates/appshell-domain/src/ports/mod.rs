//! Port traits implemented by the provider and infrastructure layers
//!
//! Each port is a capability that the service registry can hand out as an
//! `Arc<dyn Trait>`. Implementations live in `appshell-providers` (storage,
//! HTTP, global store) and `appshell-infrastructure` (settings, session).

pub mod http;
pub mod session;
pub mod settings;
pub mod state_store;
pub mod storage;

pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use session::SessionService;
pub use settings::{SettingsService, SettingsServiceExt};
pub use state_store::GlobalStore;
pub use storage::StorageProvider;
