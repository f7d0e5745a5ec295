//! Ledger store
//!
//! Persists the transaction list as one JSON array in a single blob slot.
//! Every mutation reads the full list, changes it and writes the full list
//! back; this is only safe with a single writer.
//!
//! Reads never fail: an unreadable slot is reported to the audit log and
//! treated as an empty ledger, and records without a usable id are dropped.

use serde_json::Value;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{KasError, KasResult};
use crate::models::{Transaction, TransactionId};

use super::blob::BlobStore;

/// Transaction persistence over a single blob slot
pub struct LedgerStore<S> {
    blob: S,
    audit: Option<AuditLogger>,
}

impl<S: BlobStore> LedgerStore<S> {
    pub fn new(blob: S) -> Self {
        Self { blob, audit: None }
    }

    /// Report recoveries and mutations to an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn blob(&self) -> &S {
        &self.blob
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// All stored transactions, in stored order
    pub fn list_all(&self) -> Vec<Transaction> {
        let raw = match self.blob.get() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                self.recover(format!("slot could not be read: {}", e), None);
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                self.recover(
                    format!("expected a JSON array, found {}", json_kind(&other)),
                    Some(other),
                );
                return Vec::new();
            }
            Err(e) => {
                self.recover(
                    format!("slot is not valid JSON: {}", e),
                    Some(Value::String(raw)),
                );
                return Vec::new();
            }
        };

        let mut transactions = Vec::with_capacity(items.len());
        let mut dropped = Vec::new();

        for item in items {
            match serde_json::from_value::<Transaction>(item.clone()) {
                Ok(txn) => transactions.push(txn),
                Err(_) => dropped.push(item),
            }
        }

        if !dropped.is_empty() {
            self.recover(
                format!("dropped {} record(s) without a usable id", dropped.len()),
                Some(Value::Array(dropped)),
            );
        }

        transactions
    }

    /// Append a transaction and rewrite the slot
    ///
    /// Id uniqueness is the caller's responsibility.
    pub fn add(&self, txn: Transaction) -> KasResult<()> {
        let mut transactions = self.list_all();
        transactions.push(txn);
        self.write_all(&transactions)
    }

    /// Remove every transaction with `id` and rewrite the slot
    ///
    /// Returns the removed records; an unknown id removes nothing and is not
    /// an error.
    pub fn delete_by_id(&self, id: &TransactionId) -> KasResult<Vec<Transaction>> {
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .list_all()
            .into_iter()
            .partition(|txn| &txn.id == id);
        self.write_all(&kept)?;
        Ok(removed)
    }

    fn write_all(&self, transactions: &[Transaction]) -> KasResult<()> {
        let json = serde_json::to_string(transactions)
            .map_err(|e| KasError::Storage(format!("Failed to serialize ledger: {}", e)))?;
        self.blob.set(&json)
    }

    fn recover(&self, details: String, discarded: Option<Value>) {
        if let Some(audit) = &self.audit {
            // A read must not fail because the audit log can't be written
            let _ = audit.log(&AuditEntry::recover(self.blob.key(), details, discarded));
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
