//! Byte-level persistence behind the JSON store.
//!
//! The store always moves the whole document at once, so a backend only has
//! to load and save a single blob: a file on disk in production, a buffer in
//! memory for tests.

use axum::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StoreError;

#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Returns the stored bytes, or `None` if nothing has been written yet.
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the stored bytes wholesale.
    async fn save(&self, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Backend writing to a single file at an injected path.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

/// In-memory backend for tests. Contents are lost when dropped.
#[derive(Default)]
pub struct MemoryBackend {
    contents: Mutex<Option<Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-existing contents, e.g. a legacy or corrupt document.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Mutex::new(Some(bytes.into())),
        }
    }

    /// Snapshot of the current contents.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        self.contents.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock().clone())
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        *self.lock() = Some(bytes.to_vec());
        Ok(())
    }
}
