//! Export CLI command
//!
//! Writes the ledger as CSV or JSON to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{KasError, KasResult};
use crate::export::{export_ledger_json, export_transactions_csv};
use crate::storage::Storage;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> KasResult<()> {
    let transactions = storage.ledger.list_all();
    let count = transactions.len();

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                KasError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_transactions_csv(&transactions, &mut writer)?,
        ExportFormat::Json => export_ledger_json(transactions, &mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = output {
        println!("Mengekspor {} transaksi ke {}", count, path.display());
    }

    Ok(())
}
