//! Application configuration
//!
//! Typed configuration for the application core, loaded by [`ConfigLoader`]
//! from defaults, an optional TOML file, and `APPSHELL_*` environment
//! variables.

mod loader;

pub use loader::ConfigLoader;

use crate::constants::{DEFAULT_GLOBAL_FILE, DEFAULT_SETTINGS_FILE};
use appshell_providers::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application identity and data location
    pub app: AppSection,
    /// Settings persistence tuning
    pub settings: SettingsSection,
    /// HTTP client tuning
    pub http: HttpSection,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Application identity and data location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Application name, used for the default data directory
    pub name: String,
    /// Data directory override; the platform data dir is used when unset
    pub data_dir: Option<PathBuf>,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "appshell".to_string(),
            data_dir: None,
        }
    }
}

impl AppSection {
    /// The directory settings and global store files live in
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(&self.name)
        })
    }
}

/// Settings persistence tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSection {
    /// Per-user settings backing file name
    pub file_name: String,
    /// Global store backing file name
    pub global_file_name: String,
    /// Debounce delay between the first write and the automatic save
    pub autosave_delay_secs: u64,
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_SETTINGS_FILE.to_string(),
            global_file_name: DEFAULT_GLOBAL_FILE.to_string(),
            autosave_delay_secs: 5,
        }
    }
}

impl SettingsSection {
    /// Autosave delay as a `Duration`
    pub fn autosave_delay(&self) -> Duration {
        Duration::from_secs(self.autosave_delay_secs)
    }
}

/// HTTP client tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout in seconds
    pub idle_timeout_secs: u64,
    /// TCP keep-alive in seconds
    pub keepalive_secs: u64,
    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for HttpSection {
    fn default() -> Self {
        let defaults = HttpClientConfig::default();
        Self {
            timeout_secs: defaults.timeout.as_secs(),
            max_idle_per_host: defaults.max_idle_per_host,
            idle_timeout_secs: defaults.idle_timeout.as_secs(),
            keepalive_secs: defaults.keepalive.as_secs(),
            user_agent: None,
        }
    }
}

impl HttpSection {
    /// Build the provider-level client configuration
    pub fn client_config(&self) -> HttpClientConfig {
        let defaults = HttpClientConfig::default();
        HttpClientConfig {
            max_idle_per_host: self.max_idle_per_host,
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
            keepalive: Duration::from_secs(self.keepalive_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or(defaults.user_agent),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted logs
    pub json_format: bool,
    /// Optional log file; daily rolling when set
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
