//! JSON Export functionality
//!
//! Exports the ledger with a schema version and summary metadata.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{KasError, KasResult};
use crate::models::{Money, Transaction};
use crate::services::calculate_total;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize)]
pub struct LedgerExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub transactions: Vec<Transaction>,
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    /// Running balance at export time
    pub total: Money,
    /// Earliest parseable transaction date
    pub earliest_transaction: Option<String>,
    /// Latest parseable transaction date
    pub latest_transaction: Option<String>,
}

impl LedgerExport {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let dates: Vec<_> = transactions.iter().filter_map(|t| t.calendar_date()).collect();

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            total: calculate_total(&transactions),
            earliest_transaction: dates.iter().min().map(|d| d.to_string()),
            latest_transaction: dates.iter().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            metadata,
        }
    }
}

/// Write the ledger as pretty-printed JSON
pub fn export_ledger_json<W: Write>(transactions: Vec<Transaction>, writer: &mut W) -> KasResult<()> {
    let export = LedgerExport::new(transactions);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| KasError::Export(format!("Failed to serialize export: {}", e)))?;
    writeln!(writer).map_err(|e| KasError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    #[test]
    fn test_export_metadata() {
        let list = vec![
            Transaction::new(TransactionType::Deposit, "Iuran", Money::from_rupiah(5000))
                .dated("2024-02-01"),
            Transaction::new(TransactionType::Withdrawal, "Spidol", Money::from_rupiah(2000))
                .dated("2024-01-05"),
            Transaction::new(TransactionType::Deposit, "Lama", Money::from_rupiah(1))
                .dated("???"),
        ];

        let export = LedgerExport::new(list);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 3);
        assert_eq!(export.metadata.total, Money::from_rupiah(3001));
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2024-01-05"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_export_ledger_json() {
        let list = vec![Transaction::new(
            TransactionType::Deposit,
            "Iuran",
            Money::from_rupiah(5000),
        )];

        let mut buffer = Vec::new();
        export_ledger_json(list, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["transactions"][0]["type"], "setor");
        assert_eq!(value["transactions"][0]["amount"], 5000);
        assert_eq!(value["metadata"]["total"], 5000);
    }
}
