//! Single-slot blob stores
//!
//! The ledger keeps its whole transaction list in one named slot. Callers
//! depend on the `BlobStore` trait so the file-backed store used by the CLI
//! can be swapped for an in-memory one in tests.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::config::paths::KasPaths;
use crate::error::{KasError, KasResult};

use super::file_io::{read_text, write_text_atomic};

/// A named slot holding one text blob
pub trait BlobStore {
    /// Name of the slot
    fn key(&self) -> &str;

    /// Current contents, or `None` if the slot was never written
    fn get(&self) -> KasResult<Option<String>>;

    /// Replace the contents of the slot
    fn set(&self, value: &str) -> KasResult<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn get(&self) -> KasResult<Option<String>> {
        (**self).get()
    }

    fn set(&self, value: &str) -> KasResult<()> {
        (**self).set(value)
    }
}

/// Slot backed by `<data_dir>/<key>.json`, written atomically
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    key: String,
    path: PathBuf,
}

impl FileBlobStore {
    pub fn new(paths: &KasPaths, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = paths.slot_file(&key);
        Self { key, path }
    }

    /// Slot stored at an explicit path
    pub fn at_path(key: impl Into<String>, path: PathBuf) -> Self {
        Self {
            key: key.into(),
            path,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl BlobStore for FileBlobStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn get(&self) -> KasResult<Option<String>> {
        read_text(&self.path)
    }

    fn set(&self, value: &str) -> KasResult<()> {
        write_text_atomic(&self.path, value)
    }
}

/// In-memory slot
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    key: String,
    slot: RwLock<Option<String>>,
}

impl MemoryBlobStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot: RwLock::new(None),
        }
    }

    /// Slot pre-filled with `contents`
    pub fn with_contents(key: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slot: RwLock::new(Some(contents.into())),
        }
    }
}

impl BlobStore for MemoryBlobStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn get(&self) -> KasResult<Option<String>> {
        let slot = self
            .slot
            .read()
            .map_err(|e| KasError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(slot.clone())
    }

    fn set(&self, value: &str) -> KasResult<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| KasError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *slot = Some(value.to_string());
        Ok(())
    }
}
