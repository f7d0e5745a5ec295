//! Core data models for kas-kelas
//!
//! The cashbook has a single entity, the transaction, plus the value types
//! it is built from.

pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use month::{MonthKey, MonthNames};
pub use transaction::{Amount, Transaction, TransactionType};
