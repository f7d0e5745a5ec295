//! CSV Export functionality
//!
//! Exports the transaction list to a spreadsheet-friendly CSV file.

use serde::Serialize;
use std::io::Write;

use crate::error::KasResult;
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    date: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    name: &'a str,
    /// Empty when the stored amount is not a number
    amount: Option<f64>,
}

/// Export transactions to CSV, one row per record
pub fn export_transactions_csv<W: Write>(transactions: &[Transaction], writer: W) -> KasResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for txn in transactions {
        csv_writer.serialize(CsvRow {
            id: txn.id.as_str(),
            date: &txn.date,
            kind: txn.kind.as_str(),
            name: &txn.name,
            amount: txn.amount.value().map(|m| m.as_rupiah_f64()),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
