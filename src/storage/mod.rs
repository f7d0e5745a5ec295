//! Storage layer for kas-kelas
//!
//! A single-slot blob store abstraction, a file-backed implementation with
//! atomic writes, and the ledger store built on top of it.

pub mod blob;
pub mod file_io;
pub mod ledger;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use file_io::{read_text, write_text_atomic};
pub use ledger::LedgerStore;

use crate::audit::AuditLogger;
use crate::config::paths::KasPaths;
use crate::config::settings::Settings;
use crate::error::KasError;

/// Storage wiring used by the CLI: the configured slot on disk, audited
pub struct Storage {
    paths: KasPaths,
    pub ledger: LedgerStore<FileBlobStore>,
}

impl Storage {
    /// Open the ledger slot named in `settings`, creating directories as needed
    pub fn new(paths: KasPaths, settings: &Settings) -> Result<Self, KasError> {
        paths.ensure_directories()?;

        let blob = FileBlobStore::new(&paths, settings.storage_key.clone());
        let ledger = LedgerStore::new(blob).with_audit(AuditLogger::new(paths.audit_log()));

        Ok(Self { paths, ledger })
    }

    pub fn paths(&self) -> &KasPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KasPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            storage.ledger.blob().path(),
            &temp_dir.path().join("data").join("kasKelasTransactions.json")
        );
        assert!(storage.ledger.audit().is_some());
        assert!(storage.ledger.list_all().is_empty());
    }
}
