//! User settings for kas-kelas
//!
//! Manages the storage key, the month abbreviations used for chart labels
//! and the register's date format.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::KasPaths;
use crate::error::KasError;
use crate::models::MonthNames;

/// Default name of the slot holding the transaction list
pub const DEFAULT_STORAGE_KEY: &str = "kasKelasTransactions";

/// Default register date format
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// User settings for kas-kelas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name of the slot holding the transaction list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Month abbreviations for monthly labels
    #[serde(default)]
    pub month_names: MonthNames,

    /// Date format for the register (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            storage_key: default_storage_key(),
            month_names: MonthNames::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &KasPaths) -> Result<Self, KasError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| KasError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| KasError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check the fields a hand-edited config file can get wrong
    pub fn validate(&self) -> Result<(), KasError> {
        let key = self.storage_key.trim();
        if key.is_empty() {
            return Err(KasError::Config("storage_key must not be empty".into()));
        }
        // The key becomes a file name under the data directory
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(KasError::Config(format!(
                "storage_key '{}' must be a plain name without path separators",
                self.storage_key
            )));
        }

        if !is_valid_date_format(&self.date_format) {
            return Err(KasError::Config(format!(
                "date_format '{}' is not a valid strftime format",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KasPaths) -> Result<(), KasError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KasError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KasError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Whether `format` is a strftime pattern chrono can render
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
