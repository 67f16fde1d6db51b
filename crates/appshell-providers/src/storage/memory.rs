//! In-memory storage provider for testing
//!
//! Keeps files in a concurrent map. Useful for exercising the settings store
//! and global store without touching a real filesystem.

use appshell_domain::error::{Error, Result};
use appshell_domain::ports::StorageProvider;
use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use globset::Glob;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Storage provider that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemoryStorageProvider {
    files: DashMap<String, Vec<u8>>,
    dirs: DashSet<String>,
    writes: AtomicUsize,
}

impl MemoryStorageProvider {
    /// Create an empty in-memory provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total number of `write` calls, for asserting debounce behavior
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorageProvider for MemoryStorageProvider {
    async fn file_exists(&self, path: &str) -> Result<bool> {
        Ok(self.files.contains_key(path))
    }

    async fn dir_exists(&self, path: &str) -> Result<bool> {
        Ok(self.dirs.contains(path))
    }

    async fn create_dir(&self, path: &str) -> Result<()> {
        self.dirs.insert(path.to_string());
        Ok(())
    }

    async fn read(&self, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.files.get(path).map(|data| data.value().clone()))
    }

    async fn write(&self, path: &str, data: &[u8]) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.files.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn delete_file(&self, path: &str) -> Result<()> {
        self.files.remove(path);
        Ok(())
    }

    async fn list_files(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = Glob::new(pattern)
            .map_err(|e| Error::invalid_argument(format!("bad glob pattern '{}': {}", pattern, e)))?
            .compile_matcher();
        let mut names: Vec<String> = self
            .files
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|name| matcher.is_match(name))
            .collect();
        names.sort();
        Ok(names)
    }
}
