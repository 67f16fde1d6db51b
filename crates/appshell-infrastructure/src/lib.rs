//! # appshell-infrastructure
//!
//! Infrastructure layer for the appshell application core:
//!
//! - `ioc` - the service registry resolving capabilities to providers
//! - `settings` - per-user settings persistence with debounced autosave
//! - `session` - the logged-on state holder
//! - `config` - figment-based application configuration
//! - `logging` - tracing subscriber setup
//!
//! Services here implement the ports from `appshell-domain` and are wired
//! together by the composition root in the `appshell` facade crate.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod ioc;
pub mod logging;
pub mod session;
pub mod settings;

pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use ioc::{Scope, ServiceRegistry};
pub use session::SessionManager;
pub use settings::SettingsStore;
