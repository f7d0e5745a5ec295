//! Path management for kas-kelas
//!
//! ## Path Resolution Order
//!
//! 1. `KAS_KELAS_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory joined with `kas-kelas`
//!    (`~/.config/kas-kelas` on Linux, `%APPDATA%\kas-kelas` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::KasError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "KAS_KELAS_DATA_DIR";

/// Manages all paths used by kas-kelas
#[derive(Debug, Clone)]
pub struct KasPaths {
    base_dir: PathBuf,
}

impl KasPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, KasError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create KasPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// File backing a named storage slot
    pub fn slot_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), KasError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KasError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| KasError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, KasError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| KasError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("kas-kelas"))
}
