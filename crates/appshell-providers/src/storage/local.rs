//! Filesystem storage provider
//!
//! Stores files under a root directory (normally the application data
//! directory). All paths handed to the port are interpreted relative to that
//! root; absolute paths and parent-directory escapes are rejected.

use appshell_domain::error::{Error, Result};
use appshell_domain::ports::StorageProvider;
use async_trait::async_trait;
use globset::Glob;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Storage provider backed by the local filesystem
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a provider rooted at the given directory
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory this provider writes under
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let rel = Path::new(path);
        let escapes = rel
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
        if path.is_empty() || escapes {
            return Err(Error::invalid_argument(format!(
                "storage path '{}' must be relative to the storage root",
                path
            )));
        }
        Ok(self.root.join(rel))
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    async fn file_exists(&self, path: &str) -> Result<bool> {
        let full = self.resolve(path)?;
        match tokio::fs::metadata(&full).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to stat '{}'", path),
                e,
            )),
        }
    }

    async fn dir_exists(&self, path: &str) -> Result<bool> {
        let full = self.resolve(path)?;
        match tokio::fs::metadata(&full).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to stat '{}'", path),
                e,
            )),
        }
    }

    async fn create_dir(&self, path: &str) -> Result<()> {
        let full = self.resolve(path)?;
        tokio::fs::create_dir_all(&full)
            .await
            .map_err(|e| Error::storage_with_source(format!("Failed to create '{}'", path), e))
    }

    async fn read(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let full = self.resolve(path)?;
        match tokio::fs::read(&full).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to read '{}'", path),
                e,
            )),
        }
    }

    async fn write(&self, path: &str, data: &[u8]) -> Result<()> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::storage_with_source(format!("Failed to create parent of '{}'", path), e)
            })?;
        }
        tokio::fs::write(&full, data)
            .await
            .map_err(|e| Error::storage_with_source(format!("Failed to write '{}'", path), e))
    }

    async fn delete_file(&self, path: &str) -> Result<()> {
        let full = self.resolve(path)?;
        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to delete '{}'", path),
                e,
            )),
        }
    }

    async fn list_files(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = Glob::new(pattern)
            .map_err(|e| Error::invalid_argument(format!("bad glob pattern '{}': {}", pattern, e)))?
            .compile_matcher();

        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::storage_with_source(
                    "Failed to enumerate storage root",
                    e,
                ))
            }
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::storage_with_source("Failed to enumerate storage root", e))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_file && matcher.is_match(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}
