//! Settings Service Port
//!
//! Contract for per-user settings persistence. The trait itself is
//! object-safe and speaks [`SettingValue`]; typed convenience accessors live
//! on [`SettingsServiceExt`], blanket-implemented for every service.
//!
//! Persistence is best-effort by contract: `load` and `save` never fail the
//! caller. A missing or corrupt backing file degrades to an empty map and a
//! logged warning, and save errors are logged and suppressed.

use crate::error::{Error, Result};
use crate::value_objects::{FromSetting, SettingValue};
use async_trait::async_trait;

/// Per-user settings store interface
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Load the backing file into memory
    ///
    /// Idempotent per backing filename: once loaded, further calls are no-ops
    /// until `unload(true)` resets the store.
    async fn load(&self);

    /// Persist the current map (minus ephemeral keys) and flush the global
    /// store
    async fn save(&self);

    /// Whether a backing file has been loaded
    fn is_loaded(&self) -> bool;

    /// Cancel any pending debounced save and drop ephemeral keys
    ///
    /// When `is_closing` is set, also clears the whole in-memory map and
    /// resets the loaded flag so the next `load` re-reads from disk.
    fn unload(&self, is_closing: bool);

    /// Upsert a value and schedule a debounced save
    fn set(&self, key: &str, value: SettingValue);

    /// Upsert a value and mark the key ephemeral
    ///
    /// Ephemeral keys exist only for the current run; they are excluded from
    /// every save and removed on `unload`.
    fn set_temp(&self, key: &str, value: SettingValue);

    /// Look up a value, failing when the key is absent
    fn get(&self, key: &str) -> Result<SettingValue>;

    /// Look up a value
    fn try_get(&self, key: &str) -> Option<SettingValue>;

    /// Whether a key is present
    fn contains(&self, key: &str) -> bool;

    /// All entries matching a selector
    fn get_all(&self, selector: &dyn Fn(&str, &SettingValue) -> bool)
        -> Vec<(String, SettingValue)>;

    /// Remove a key, reporting whether it was present; does not schedule a
    /// save
    fn remove(&self, key: &str) -> bool;

    /// Remove every entry matching a selector; does not schedule a save
    fn remove_all(&self, selector: &dyn Fn(&str, &SettingValue) -> bool);

    /// Upsert into the global (cross-install) namespace
    fn set_global(&self, key: &str, value: SettingValue);

    /// Look up a value in the global namespace
    fn get_global(&self, key: &str) -> Option<SettingValue>;

    /// Remove a key from the global namespace
    fn remove_global(&self, key: &str) -> bool;
}

/// Typed convenience accessors over [`SettingsService`]
pub trait SettingsServiceExt {
    /// Upsert any value convertible to a [`SettingValue`]
    fn set_as<V: Into<SettingValue>>(&self, key: &str, value: V);

    /// Upsert an ephemeral value
    fn set_temp_as<V: Into<SettingValue>>(&self, key: &str, value: V);

    /// Upsert a global value
    fn set_global_as<V: Into<SettingValue>>(&self, key: &str, value: V);

    /// Typed lookup, failing when the key is absent or of the wrong type
    fn get_as<V: FromSetting>(&self, key: &str) -> Result<V>;

    /// Typed lookup
    fn try_get_as<V: FromSetting>(&self, key: &str) -> Option<V>;

    /// Typed lookup falling back to the type's default value
    fn get_or_default<V: FromSetting + Default>(&self, key: &str) -> V;

    /// Typed lookup with a fallback for absent or mistyped keys
    fn get_or<V: FromSetting>(&self, key: &str, default: V) -> V;

    /// Typed lookup with a fallback, plus a predicate deciding whether a
    /// present value should be discarded in favor of the default
    fn get_or_with<V, F>(&self, key: &str, default: V, use_default: F) -> V
    where
        V: FromSetting,
        F: FnOnce(&V) -> bool;

    /// Typed global lookup with a fallback
    fn global_or<V: FromSetting>(&self, key: &str, default: V) -> V;
}

impl<S: SettingsService + ?Sized> SettingsServiceExt for S {
    fn set_as<V: Into<SettingValue>>(&self, key: &str, value: V) {
        self.set(key, value.into());
    }

    fn set_temp_as<V: Into<SettingValue>>(&self, key: &str, value: V) {
        self.set_temp(key, value.into());
    }

    fn set_global_as<V: Into<SettingValue>>(&self, key: &str, value: V) {
        self.set_global(key, value.into());
    }

    fn get_as<V: FromSetting>(&self, key: &str) -> Result<V> {
        let value = self.get(key)?;
        V::from_setting(&value).ok_or_else(|| {
            Error::invalid_argument(format!(
                "setting '{}' holds a {} value, not a {}",
                key,
                value.type_label(),
                std::any::type_name::<V>()
            ))
        })
    }

    fn try_get_as<V: FromSetting>(&self, key: &str) -> Option<V> {
        self.try_get(key).and_then(|v| V::from_setting(&v))
    }

    fn get_or_default<V: FromSetting + Default>(&self, key: &str) -> V {
        self.try_get_as(key).unwrap_or_default()
    }

    fn get_or<V: FromSetting>(&self, key: &str, default: V) -> V {
        self.try_get_as(key).unwrap_or(default)
    }

    fn get_or_with<V, F>(&self, key: &str, default: V, use_default: F) -> V
    where
        V: FromSetting,
        F: FnOnce(&V) -> bool,
    {
        match self.try_get_as::<V>(key) {
            Some(value) if !use_default(&value) => value,
            _ => default,
        }
    }

    fn global_or<V: FromSetting>(&self, key: &str, default: V) -> V {
        self.get_global(key)
            .and_then(|v| V::from_setting(&v))
            .unwrap_or(default)
    }
}
