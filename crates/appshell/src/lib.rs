//! # appshell
//!
//! The reusable core of a small connected application: a capability
//! registry with singleton and per-resolve scopes, per-user settings
//! persistence with debounced autosave, an observable session state, and an
//! HTTP client wrapper - wired together by an explicit [`AppContext`] built
//! at startup.
//!
//! ## Example
//!
//! ```ignore
//! use appshell::{bootstrap, AppConfig};
//! use appshell::ports::{SettingsServiceExt, SessionService};
//!
//! let context = bootstrap(AppConfig::default())?;
//! context.startup().await;
//!
//! context.session().perform_log_on("user", "password").await?;
//! context.settings().set_as("volume", 0.8f64);
//!
//! context.shutdown().await;
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a ports-and-adapters layout:
//!
//! - `domain` - error type, setting values, and port traits
//! - `providers` - storage, HTTP, and global store adapters
//! - `infrastructure` - service registry, settings store, session state,
//!   configuration, and logging
//! - this crate - the composition root and public facade

/// Domain layer - error type, value objects, and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use appshell_domain::*;
}

/// Infrastructure layer - registry, settings, session, config, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use appshell_infrastructure::*;
}

/// Provider implementations - storage, HTTP, and global store adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use appshell_providers::*;
}

mod context;

pub use context::{bootstrap, AppContext};

// Re-export the types most callers need at the crate root
pub use appshell_domain::error::{Error, Result};
pub use appshell_domain::ports;
pub use appshell_domain::value_objects::{SettingValue, Size};
pub use appshell_infrastructure::config::{AppConfig, ConfigLoader};
pub use appshell_infrastructure::ioc::{Scope, ServiceRegistry};
pub use appshell_infrastructure::logging::init_logging;
