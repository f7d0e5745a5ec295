//! kas-kelas - class-fund cashbook
//!
//! This library provides the core of the kas kelas cashbook: a single ledger
//! of deposits (setor) and withdrawals (keluar) persisted in one named slot
//! of a blob store, a running balance, and a monthly breakdown ready for a
//! bar chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, months)
//! - `storage`: Blob store and the ledger store on top of it
//! - `services`: Aggregation and the ledger service
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting, register and bar chart
//! - `export`: CSV and JSON export
//!
//! # Example
//!
//! ```rust,ignore
//! use kas_kelas::storage::{LedgerStore, MemoryBlobStore};
//! use kas_kelas::services::calculate_total;
//!
//! let store = LedgerStore::new(MemoryBlobStore::new("kasKelasTransactions"));
//! let total = calculate_total(&store.list_all());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::KasError;
