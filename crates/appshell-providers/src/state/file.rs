//! File-backed global store
//!
//! Write-through in-memory map persisted to a JSON file through a
//! `StorageProvider`. Reads and writes hit the map immediately; `flush`
//! persists the whole map. A corrupt backing file degrades to an empty map.

use appshell_domain::error::Result;
use appshell_domain::ports::{GlobalStore, StorageProvider};
use appshell_domain::value_objects::SettingValue;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Global store persisted to a single JSON file
pub struct FileGlobalStore {
    storage: Arc<dyn StorageProvider>,
    file_name: String,
    values: DashMap<String, SettingValue>,
    loaded: AtomicBool,
}

impl FileGlobalStore {
    /// Create a store backed by `file_name` inside the given storage
    pub fn new(storage: Arc<dyn StorageProvider>, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
            values: DashMap::new(),
            loaded: AtomicBool::new(false),
        }
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Debug for FileGlobalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileGlobalStore")
            .field("file_name", &self.file_name)
            .field("entries", &self.values.len())
            .field("loaded", &self.loaded.load(Ordering::SeqCst))
            .finish()
    }
}

#[async_trait]
impl GlobalStore for FileGlobalStore {
    async fn load(&self) -> Result<()> {
        if self.loaded.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        match self.storage.read(&self.file_name).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<HashMap<String, SettingValue>>(&bytes)
            {
                Ok(map) => {
                    for (key, value) in map {
                        self.values.insert(key, value);
                    }
                }
                Err(e) => {
                    warn!(file = %self.file_name, error = %e, "Global store file is malformed, starting empty");
                }
            },
            Ok(None) => {}
            Err(e) => {
                warn!(file = %self.file_name, error = %e, "Failed to read global store file, starting empty");
            }
        }
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
        // BTreeMap snapshot keeps the file diffable across flushes
        let snapshot: BTreeMap<String, SettingValue> = self
            .values
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        self.storage.write(&self.file_name, &bytes).await
    }
}
