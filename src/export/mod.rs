//! Export module for kas-kelas
//!
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: the full ledger with schema version and metadata

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
