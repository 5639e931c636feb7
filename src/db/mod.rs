pub mod backend;
pub mod messages;
pub mod models;
pub mod subscribers;
pub mod users;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use models::*;
pub use users::UserConflict;

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::StoreError;

/// Flat JSON store holding subscribers, messages and users.
///
/// Nothing is cached: every call reads the full document from the backend,
/// and every mutation rewrites it in full.
#[derive(Clone)]
pub struct Database {
    backend: Arc<dyn StorageBackend>,
    // Serializes read-modify-write cycles within this process
    write_lock: Arc<Mutex<()>>,
}

impl Database {
    pub fn new<B>(backend: B) -> Self
    where
        B: StorageBackend + 'static,
    {
        Self::from_backend(Arc::new(backend))
    }

    pub fn from_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// File-backed store at `path`. The file is created on first read.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(path))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Load the full document, initializing an empty one if none exists.
    pub async fn read(&self) -> Result<Document, StoreError> {
        match self.backend.load().await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => {
                let document = Document::default();
                self.write(&document).await?;
                tracing::info!("Initialized empty store");
                Ok(document)
            }
        }
    }

    /// Overwrite the stored document (pretty JSON, 2-space indent).
    pub async fn write(&self, document: &Document) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        self.backend.save(&bytes).await
    }

    /// Read, apply `f`, and write back only if `f` succeeded.
    pub async fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read().await?;
        let value = f(&mut document)?;
        self.write(&document).await?;
        Ok(value)
    }
}
