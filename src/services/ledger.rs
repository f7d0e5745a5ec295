//! Ledger service
//!
//! Business logic on top of the ledger store: validates user input for new
//! transactions, stamps their id and date, keeps the audit log, and builds
//! the summary the front end renders (register, balance, monthly chart).

use crate::audit::{AuditEntry, EntityType};
use crate::error::{KasError, KasResult};
use crate::models::{MonthNames, Money, Transaction, TransactionId, TransactionType};
use crate::storage::{BlobStore, LedgerStore};

use super::aggregate::{calculate_total, monthly_data, MonthlyData};

/// Message shown when a new transaction is rejected
pub const INVALID_INPUT_MESSAGE: &str = "Data transaksi tidak valid! Pastikan nama terisi dan nominal adalah angka yang lebih dari Rp 0.";

/// User input for a new transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub name: String,
    pub amount: Money,
}

impl NewTransaction {
    pub fn new(kind: TransactionType, name: impl Into<String>, amount: Money) -> Self {
        Self {
            kind,
            name: name.into(),
            amount,
        }
    }

    /// Build from raw text fields, as typed by the user
    pub fn from_input(kind: &str, name: &str, amount: &str) -> KasResult<Self> {
        let kind = TransactionType::parse(kind).ok_or_else(|| {
            KasError::Validation(format!(
                "Jenis transaksi tidak dikenal: '{}'. Gunakan 'setor' atau 'keluar'.",
                kind
            ))
        })?;
        let amount =
            Money::parse(amount).map_err(|_| KasError::Validation(INVALID_INPUT_MESSAGE.into()))?;
        Ok(Self::new(kind, name, amount))
    }

    /// Reject an unknown type, a blank name, or an amount that is not
    /// positive or is too large to be read back from storage
    pub fn validate(&self) -> KasResult<()> {
        if !self.kind.is_known() {
            return Err(KasError::Validation(format!(
                "Jenis transaksi tidak dikenal: '{}'. Gunakan 'setor' atau 'keluar'.",
                self.kind
            )));
        }
        if self.name.trim().is_empty()
            || !self.amount.is_positive()
            || self.amount > Money::MAX
        {
            return Err(KasError::Validation(INVALID_INPUT_MESSAGE.into()));
        }
        Ok(())
    }
}

/// Everything needed to render the cashbook at once
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    /// All transactions, newest first
    pub transactions: Vec<Transaction>,
    /// Running balance
    pub total: Money,
    /// Monthly chart data
    pub monthly: MonthlyData,
}

/// Service for cashbook operations
pub struct LedgerService<'a, S> {
    store: &'a LedgerStore<S>,
    month_names: MonthNames,
}

impl<'a, S: BlobStore> LedgerService<'a, S> {
    pub fn new(store: &'a LedgerStore<S>) -> Self {
        Self {
            store,
            month_names: MonthNames::default(),
        }
    }

    /// Use a different month abbreviation set for monthly labels
    pub fn with_month_names(mut self, month_names: MonthNames) -> Self {
        self.month_names = month_names;
        self
    }

    /// Validate, stamp and store a new transaction
    pub fn record(&self, input: NewTransaction) -> KasResult<Transaction> {
        input.validate()?;

        let txn = Transaction::new(input.kind, input.name.trim(), input.amount);
        self.store.add(txn.clone())?;

        if let Some(audit) = self.store.audit() {
            audit.log(&AuditEntry::create(
                EntityType::Transaction,
                txn.id.as_str(),
                Some(txn.name.clone()),
                &txn,
            ))?;
        }

        Ok(txn)
    }

    /// Delete by id; a blank or unknown id is a no-op
    ///
    /// Returns the number of records removed.
    pub fn delete(&self, id: &str) -> KasResult<usize> {
        let Ok(id) = id.parse::<TransactionId>() else {
            return Ok(0);
        };

        let removed = self.store.delete_by_id(&id)?;

        if let Some(audit) = self.store.audit() {
            for txn in &removed {
                audit.log(&AuditEntry::delete(
                    EntityType::Transaction,
                    txn.id.as_str(),
                    Some(txn.name.clone()),
                    txn,
                ))?;
            }
        }

        Ok(removed.len())
    }

    /// Look up a single transaction
    pub fn find(&self, id: &str) -> Option<Transaction> {
        let id = id.parse::<TransactionId>().ok()?;
        self.store.list_all().into_iter().find(|txn| txn.id == id)
    }

    /// All transactions, newest first; undated records go last
    pub fn list_newest_first(&self) -> Vec<Transaction> {
        let mut transactions = self.store.list_all();
        sort_newest_first(&mut transactions);
        transactions
    }

    pub fn total(&self) -> Money {
        calculate_total(&self.store.list_all())
    }

    pub fn monthly(&self) -> MonthlyData {
        monthly_data(&self.store.list_all(), self.month_names)
    }

    /// Register, balance and monthly data from a single read
    pub fn summary(&self) -> LedgerSummary {
        let mut transactions = self.store.list_all();
        let total = calculate_total(&transactions);
        let monthly = monthly_data(&transactions, self.month_names);
        sort_newest_first(&mut transactions);

        LedgerSummary {
            transactions,
            total,
            monthly,
        }
    }
}

fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|txn| std::cmp::Reverse(txn.timestamp()));
}
