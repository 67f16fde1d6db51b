//! In-memory global store for testing

use appshell_domain::error::Result;
use appshell_domain::ports::GlobalStore;
use appshell_domain::value_objects::SettingValue;
use async_trait::async_trait;
use dashmap::DashMap;

/// Global store that never persists
#[derive(Debug, Default)]
pub struct MemoryGlobalStore {
    values: DashMap<String, SettingValue>,
}

impl MemoryGlobalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GlobalStore for MemoryGlobalStore {
    async fn load(&self) -> Result<()> {
        Ok(())
    }

    fn set(&self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    fn remove(&self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}
