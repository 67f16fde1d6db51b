//! Global Store Port
//!
//! Contract for the cross-install key/value namespace. Unlike the per-user
//! settings file, the global store is always available: values written here
//! survive `unload` of the settings store and are shared by every session.

use crate::error::Result;
use crate::value_objects::SettingValue;
use async_trait::async_trait;

/// Always-persisted key/value store interface
#[async_trait]
pub trait GlobalStore: Send + Sync {
    /// Populate the in-memory map from the backing store
    ///
    /// Idempotent; subsequent calls are no-ops until the process restarts.
    async fn load(&self) -> Result<()>;

    /// Upsert a value
    fn set(&self, key: &str, value: SettingValue);

    /// Look up a value
    fn get(&self, key: &str) -> Option<SettingValue>;

    /// Remove a value, reporting whether it was present
    fn remove(&self, key: &str) -> bool;

    /// Persist the current map to the backing store
    async fn flush(&self) -> Result<()>;
}
