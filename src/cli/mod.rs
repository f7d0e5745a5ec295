//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod export;
pub mod ledger;

pub use export::{handle_export_command, ExportFormat};
pub use ledger::{handle_ledger_command, LedgerCommands};
