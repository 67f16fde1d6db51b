//! Global store tests

use appshell_domain::ports::{GlobalStore, StorageProvider};
use appshell_domain::value_objects::SettingValue;
use appshell_providers::{FileGlobalStore, MemoryGlobalStore, MemoryStorageProvider};
use std::sync::Arc;

#[tokio::test]
async fn test_file_store_flush_and_reload() {
    let storage = Arc::new(MemoryStorageProvider::new());

    let store = FileGlobalStore::new(storage.clone(), "global.json");
    store.load().await.unwrap();
    store.set("install_count", SettingValue::from(3i64));
    store.set("beta", SettingValue::from(true));
    store.flush().await.unwrap();

    // a fresh store over the same backing file sees the flushed values
    let reloaded = FileGlobalStore::new(storage.clone(), "global.json");
    reloaded.load().await.unwrap();
    assert_eq!(
        reloaded.get("install_count"),
        Some(SettingValue::from(3i64))
    );
    assert_eq!(reloaded.get("beta"), Some(SettingValue::from(true)));
}

#[tokio::test]
async fn test_file_store_load_is_idempotent() {
    let storage = Arc::new(MemoryStorageProvider::new());
    let store = FileGlobalStore::new(storage, "global.json");

    store.load().await.unwrap();
    store.set("k", SettingValue::from("v"));
    // a second load must not re-read (and thus not clobber) the map
    store.load().await.unwrap();
    assert_eq!(store.get("k"), Some(SettingValue::from("v")));
}

#[tokio::test]
async fn test_file_store_malformed_file_degrades_to_empty() {
    let storage = Arc::new(MemoryStorageProvider::new());
    storage.write("global.json", b"not json at all").await.unwrap();

    let store = FileGlobalStore::new(storage, "global.json");
    store.load().await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_file_store_remove() {
    let storage = Arc::new(MemoryStorageProvider::new());
    let store = FileGlobalStore::new(storage, "global.json");
    store.load().await.unwrap();

    store.set("k", SettingValue::from(1i64));
    assert!(store.remove("k"));
    assert!(!store.remove("k"));
    assert_eq!(store.get("k"), None);
}

#[tokio::test]
async fn test_memory_store_basics() {
    let store = MemoryGlobalStore::new();
    store.load().await.unwrap();

    assert_eq!(store.get("missing"), None);
    store.set("k", SettingValue::from("v"));
    assert_eq!(store.get("k"), Some(SettingValue::from("v")));
    store.flush().await.unwrap();
    assert!(store.remove("k"));
}
