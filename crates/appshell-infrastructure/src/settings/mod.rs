//! Settings store
//!
//! Per-user key/value settings persisted to a JSON backing file through a
//! `StorageProvider`, with a separate always-persisted `GlobalStore`
//! namespace and ephemeral keys that never reach disk.
//!
//! Persistence is best-effort by contract: a missing or corrupt backing file
//! degrades to an empty map with a logged warning, and save failures are
//! logged and suppressed. Writes schedule a single debounced save so rapid
//! successive `set` calls coalesce into one disk write.

use appshell_domain::error::{Error, Result};
use appshell_domain::ports::{GlobalStore, SettingsService, StorageProvider};
use appshell_domain::value_objects::SettingValue;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::constants::DEFAULT_SETTINGS_FILE;

/// Default delay between the first `set` and the debounced save
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_secs(5);

/// Settings store implementing the `SettingsService` port
///
/// `set` schedules the debounced save on the current tokio runtime, so the
/// store must be used from within one.
pub struct SettingsStore {
    storage: Arc<dyn StorageProvider>,
    global: Arc<dyn GlobalStore>,
    file_name: String,
    autosave_delay: Duration,
    values: RwLock<HashMap<String, SettingValue>>,
    temp_keys: Mutex<HashSet<String>>,
    loaded_file: Mutex<Option<String>>,
    save_pending: AtomicBool,
    autosave_cancel: Mutex<CancellationToken>,
    me: Weak<SettingsStore>,
}

impl SettingsStore {
    /// Create a store with the default backing file and autosave delay
    pub fn new(storage: Arc<dyn StorageProvider>, global: Arc<dyn GlobalStore>) -> Arc<Self> {
        Self::with_options(storage, global, DEFAULT_SETTINGS_FILE, DEFAULT_AUTOSAVE_DELAY)
    }

    /// Create a store with an explicit backing file name and autosave delay
    pub fn with_options(
        storage: Arc<dyn StorageProvider>,
        global: Arc<dyn GlobalStore>,
        file_name: impl Into<String>,
        autosave_delay: Duration,
    ) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            storage,
            global,
            file_name: file_name.into(),
            autosave_delay,
            values: RwLock::new(HashMap::new()),
            temp_keys: Mutex::new(HashSet::new()),
            loaded_file: Mutex::new(None),
            save_pending: AtomicBool::new(false),
            autosave_cancel: Mutex::new(CancellationToken::new()),
            me: me.clone(),
        })
    }

    /// The backing file name this store persists to
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Serialize the map minus ephemeral keys and write the backing file
    async fn write_backing_file(&self) {
        let snapshot: BTreeMap<String, SettingValue> = {
            let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
            let temp = self.temp_keys.lock().unwrap_or_else(PoisonError::into_inner);
            values
                .iter()
                .filter(|(key, _)| !temp.contains(*key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        };
        let bytes = match serde_json::to_vec_pretty(&snapshot) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(file = %self.file_name, error = %e, "Failed to serialize settings");
                return;
            }
        };
        if let Err(e) = self.storage.write(&self.file_name, &bytes).await {
            error!(file = %self.file_name, error = %e, "Failed to write settings file");
        }
    }

    /// Schedule one debounced save; no-op while a save is already pending
    fn schedule_autosave(&self) {
        if self.save_pending.swap(true, Ordering::SeqCst) {
            return;
        }
        let Some(store) = self.me.upgrade() else {
            self.save_pending.store(false, Ordering::SeqCst);
            return;
        };
        let cancel = self
            .autosave_cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let delay = self.autosave_delay;
        debug!(file = %self.file_name, ?delay, "scheduled settings autosave");

        tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {
                    store.save_pending.store(false, Ordering::SeqCst);
                }
                () = tokio::time::sleep(delay) => {
                    store.save().await;
                    store.save_pending.store(false, Ordering::SeqCst);
                }
            }
        });
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("file_name", &self.file_name)
            .field("loaded", &self.is_loaded())
            .field("save_pending", &self.save_pending.load(Ordering::SeqCst))
            .finish()
    }
}

#[async_trait]
impl SettingsService for SettingsStore {
    async fn load(&self) {
        {
            let loaded = self.loaded_file.lock().unwrap_or_else(PoisonError::into_inner);
            if loaded.as_deref() == Some(self.file_name.as_str()) {
                return;
            }
        }

        if let Err(e) = self.global.load().await {
            warn!(error = %e, "Failed to load global store");
        }

        match self.storage.read(&self.file_name).await {
            Ok(Some(bytes)) => {
                match serde_json::from_slice::<HashMap<String, SettingValue>>(&bytes) {
                    Ok(map) => {
                        let mut values =
                            self.values.write().unwrap_or_else(PoisonError::into_inner);
                        for (key, value) in map {
                            values.insert(key, value);
                        }
                    }
                    Err(e) => {
                        warn!(file = %self.file_name, error = %e, "Settings file is malformed, starting with empty settings");
                    }
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(file = %self.file_name, error = %e, "Failed to read settings file, starting with empty settings");
            }
        }

        self.temp_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        *self.loaded_file.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(self.file_name.clone());
    }

    async fn save(&self) {
        self.write_backing_file().await;
        if let Err(e) = self.global.flush().await {
            error!(error = %e, "Failed to flush global store");
        }
    }

    fn is_loaded(&self) -> bool {
        self.loaded_file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn unload(&self, is_closing: bool) {
        if !self.is_loaded() {
            return;
        }

        // cancel a pending (not yet started) autosave and arm a fresh token
        // so later sets can schedule again
        {
            let mut cancel = self
                .autosave_cancel
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            cancel.cancel();
            *cancel = CancellationToken::new();
        }
        self.save_pending.store(false, Ordering::SeqCst);

        {
            let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
            let mut temp = self.temp_keys.lock().unwrap_or_else(PoisonError::into_inner);
            for key in temp.drain() {
                values.remove(&key);
            }
            if is_closing {
                values.clear();
            }
        }
        if is_closing {
            *self.loaded_file.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }
    }

    fn set(&self, key: &str, value: SettingValue) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        self.schedule_autosave();
    }

    fn set_temp(&self, key: &str, value: SettingValue) {
        self.set(key, value);
        self.temp_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string());
    }

    fn get(&self, key: &str) -> Result<SettingValue> {
        self.try_get(key)
            .ok_or_else(|| Error::not_found(format!("setting '{}'", key)))
    }

    fn try_get(&self, key: &str) -> Option<SettingValue> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn contains(&self, key: &str) -> bool {
        !key.is_empty()
            && self
                .values
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(key)
    }

    fn get_all(
        &self,
        selector: &dyn Fn(&str, &SettingValue) -> bool,
    ) -> Vec<(String, SettingValue)> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(key, value)| selector(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn remove(&self, key: &str) -> bool {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some()
    }

    fn remove_all(&self, selector: &dyn Fn(&str, &SettingValue) -> bool) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|key, value| !selector(key, value));
    }

    fn set_global(&self, key: &str, value: SettingValue) {
        self.global.set(key, value);
    }

    fn get_global(&self, key: &str) -> Option<SettingValue> {
        self.global.get(key)
    }

    fn remove_global(&self, key: &str) -> bool {
        self.global.remove(key)
    }
}
