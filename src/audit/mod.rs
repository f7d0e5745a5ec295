//! Audit logging for kas-kelas
//!
//! Records transaction creates and deletes, and every time the ledger store
//! throws away stored data it could not read, in an append-only JSON-lines
//! log.
//!
//! ```rust,ignore
//! use kas_kelas::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Transaction,
//!     txn.id.as_str(),
//!     Some(txn.name.clone()),
//!     &txn,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
