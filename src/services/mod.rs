//! Service layer for kas-kelas
//!
//! Pure aggregations over transaction lists, and the ledger service that
//! validates input and coordinates the store with the audit log.

pub mod aggregate;
pub mod ledger;

pub use aggregate::{calculate_total, monthly_data, MonthlyData};
pub use ledger::{LedgerService, LedgerSummary, NewTransaction, INVALID_INPUT_MESSAGE};
