//! Display formatting for terminal output
//!
//! Rupiah amounts, the transaction register, the monthly table and the
//! monthly bar chart.

pub mod chart;
pub mod report;
pub mod transaction;

pub use chart::{BarChart, ChartSlot};
pub use report::{format_balance_report, format_monthly_table};
pub use transaction::{
    format_balance, format_rupiah, format_transaction_details, format_transaction_register,
};
