//! Transaction display formatting
//!
//! Rupiah formatting and the transaction register.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::config::settings::DEFAULT_DATE_FORMAT;
use crate::models::{Money, Transaction, TransactionType};

/// Message shown for an empty ledger
pub const EMPTY_LEDGER_MESSAGE: &str = "Belum ada transaksi yang dicatat.";

/// Format an amount as rupiah with a sign taken from the transaction type
///
/// Deposits get `+`, withdrawals `-`, anything else no sign. The magnitude
/// is always shown.
pub fn format_rupiah(amount: Money, kind: Option<&TransactionType>) -> String {
    let prefix = match kind {
        Some(TransactionType::Deposit) => "+",
        Some(TransactionType::Withdrawal) => "-",
        _ => "",
    };
    format!("{}{}", prefix, amount.abs())
}

/// Format the running balance, keeping its sign
pub fn format_balance(total: Money) -> String {
    total.to_string()
}

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, date_format: &str) -> String {
    let date = txn
        .timestamp()
        .map(|dt| format_date(dt, date_format))
        .unwrap_or_else(|| "-".to_string());

    let amount = match txn.amount.value() {
        Some(amount) => format_rupiah(amount, Some(&txn.kind)),
        None => "(tidak valid)".to_string(),
    };

    format!(
        "{:10} {:24} {:>16}  {}",
        date,
        truncate(&txn.name, 24),
        amount,
        txn.id
    )
}

/// Format a timestamp, falling back to the default format when `format`
/// can't be rendered
fn format_date(dt: NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", dt.format(format)).is_ok() {
        return out;
    }
    dt.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return format!("{}\n", EMPTY_LEDGER_MESSAGE);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:>16}  {}\n",
        "Tanggal", "Keterangan", "Nominal", "ID"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, date_format));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaksi:  {}\n", txn.id));
    output.push_str(&format!("Tanggal:    {}\n", txn.date));
    output.push_str(&format!("Jenis:      {}\n", txn.kind));
    output.push_str(&format!("Keterangan: {}\n", txn.name));
    match txn.amount.value() {
        Some(amount) => output.push_str(&format!("Nominal:    {}\n", amount)),
        None => output.push_str("Nominal:    (tidak valid)\n"),
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use serde_json::json;

    #[test]
    fn test_format_rupiah() {
        let amount = Money::from_rupiah(5000);
        assert_eq!(format_rupiah(amount, Some(&TransactionType::Deposit)), "+Rp 5.000");
        assert_eq!(format_rupiah(amount, Some(&TransactionType::Withdrawal)), "-Rp 5.000");
        assert_eq!(format_rupiah(amount, None), "Rp 5.000");
        assert_eq!(format_rupiah(-amount, None), "Rp 5.000");
        assert_eq!(
            format_rupiah(Money::from_rupiah(1_250_000), Some(&TransactionType::Other("x".into()))),
            "Rp 1.250.000"
        );
    }

    #[test]
    fn test_format_balance_keeps_sign() {
        assert_eq!(format_balance(Money::from_rupiah(3000)), "Rp 3.000");
        assert_eq!(format_balance(Money::from_rupiah(-3000)), "-Rp 3.000");
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(
            format_transaction_register(&[], "%d/%m/%Y"),
            "Belum ada transaksi yang dicatat.\n"
        );
    }

    #[test]
    fn test_register_rows() {
        let txn = Transaction::new(TransactionType::Withdrawal, "Spidol", Money::from_rupiah(2000))
            .dated("2024-02-05T08:00:00.000Z");
        let output = format_transaction_register(&[txn.clone()], "%d/%m/%Y");

        assert!(output.starts_with("Tanggal"));
        let row = output.lines().nth(2).unwrap();
        assert!(row.starts_with("05/02/2024 Spidol"));
        assert!(row.contains("-Rp 2.000"));
        assert!(row.ends_with(txn.id.as_str()));
    }

    #[test]
    fn test_row_with_bad_data() {
        let mut txn = Transaction::new(TransactionType::Deposit, "Lama", Money::from_rupiah(1))
            .dated("???");
        txn.amount = Amount::Invalid(json!("abc"));

        let row = format_transaction_row(&txn, "%d/%m/%Y");
        assert!(row.starts_with("-          Lama"));
        assert!(row.contains("(tidak valid)"));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back() {
        let txn = Transaction::new(TransactionType::Deposit, "Iuran", Money::from_rupiah(5000))
            .dated("2024-02-05T08:00:00.000Z");

        let row = format_transaction_row(&txn, "%Q");
        assert!(row.starts_with("05/02/2024 Iuran"));

        let register = format_transaction_register(&[txn], "%Q");
        assert!(register.contains("05/02/2024"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Iuran kas bulan Januari", 10), "Iuran k...");
    }
}
