//! Infrastructure-wide constants

/// Default per-user settings backing file
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Default global (cross-install) store backing file
pub const DEFAULT_GLOBAL_FILE: &str = "global.json";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "appshell.toml";

/// Directory name used under the platform config directory
pub const DEFAULT_CONFIG_DIR: &str = "appshell";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "APPSHELL";

/// Environment variable controlling the tracing filter
pub const LOG_FILTER_ENV: &str = "APPSHELL_LOG";
