//! Storage provider tests

use appshell_domain::ports::StorageProvider;
use appshell_providers::{LocalStorageProvider, MemoryStorageProvider};

#[tokio::test]
async fn test_local_write_read_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = LocalStorageProvider::new(dir.path());

    assert!(!storage.file_exists("notes.json").await.unwrap());
    storage.write("notes.json", b"{\"a\":1}").await.unwrap();
    assert!(storage.file_exists("notes.json").await.unwrap());

    let data = storage.read("notes.json").await.unwrap();
    assert_eq!(data.as_deref(), Some(&b"{\"a\":1}"[..]));
}

#[tokio::test]
async fn test_local_read_missing_is_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = LocalStorageProvider::new(dir.path());
    assert_eq!(storage.read("missing.json").await.unwrap(), None);
}

#[tokio::test]
async fn test_local_delete_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = LocalStorageProvider::new(dir.path());

    storage.write("tmp.bin", &[1, 2, 3]).await.unwrap();
    storage.delete_file("tmp.bin").await.unwrap();
    assert!(!storage.file_exists("tmp.bin").await.unwrap());
    // second delete is a no-op
    storage.delete_file("tmp.bin").await.unwrap();
}

#[tokio::test]
async fn test_local_list_files_by_glob() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = LocalStorageProvider::new(dir.path());

    storage.write("settings.json", b"{}").await.unwrap();
    storage.write("global.json", b"{}").await.unwrap();
    storage.write("image.png", &[0]).await.unwrap();

    let json_files = storage.list_files("*.json").await.unwrap();
    assert_eq!(json_files, vec!["global.json", "settings.json"]);

    let all = storage.list_files("*").await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_local_rejects_escaping_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = LocalStorageProvider::new(dir.path());

    assert!(storage.read("../outside.json").await.is_err());
    assert!(storage.write("/etc/oops", b"x").await.is_err());
}

#[tokio::test]
async fn test_local_create_dir_and_nested_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = LocalStorageProvider::new(dir.path());

    assert!(!storage.dir_exists("cache").await.unwrap());
    storage.create_dir("cache").await.unwrap();
    assert!(storage.dir_exists("cache").await.unwrap());

    // parents are created on write as well
    storage.write("deep/nested/file.txt", b"hi").await.unwrap();
    assert!(storage.file_exists("deep/nested/file.txt").await.unwrap());
}

#[tokio::test]
async fn test_memory_provider_behaves_like_storage() {
    let storage = MemoryStorageProvider::new();

    storage.write("settings.json", b"{}").await.unwrap();
    storage.write("other.txt", b"x").await.unwrap();
    assert!(storage.file_exists("settings.json").await.unwrap());
    assert_eq!(
        storage.read("settings.json").await.unwrap().as_deref(),
        Some(&b"{}"[..])
    );
    assert_eq!(
        storage.list_files("*.json").await.unwrap(),
        vec!["settings.json"]
    );

    storage.delete_file("settings.json").await.unwrap();
    assert_eq!(storage.read("settings.json").await.unwrap(), None);
    assert_eq!(storage.file_count(), 1);
}
