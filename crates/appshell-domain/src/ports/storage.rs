//! Storage Provider Port
//!
//! Defines the contract for file storage used by the settings store and the
//! global store. Paths are relative to the provider's root; the provider
//! decides where that root lives (application data directory, in-memory map
//! for tests).

use crate::error::Result;
use async_trait::async_trait;

/// File storage interface
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Check whether a file exists
    async fn file_exists(&self, path: &str) -> Result<bool>;

    /// Check whether a directory exists
    async fn dir_exists(&self, path: &str) -> Result<bool>;

    /// Create a directory, including missing parents
    async fn create_dir(&self, path: &str) -> Result<()>;

    /// Read a file's full contents, or `None` when it does not exist
    async fn read(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Create or truncate a file with the given contents
    async fn write(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Delete a file; deleting a missing file is a no-op
    async fn delete_file(&self, path: &str) -> Result<()>;

    /// List file names in the root matching a glob pattern (e.g. `*.json`)
    async fn list_files(&self, pattern: &str) -> Result<Vec<String>>;
}
