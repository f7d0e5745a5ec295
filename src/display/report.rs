//! Report formatting for terminal output
//!
//! The balance headline and the monthly breakdown table.

use chrono::{DateTime, Local};

use crate::models::Money;
use crate::services::MonthlyData;

/// Color a balance: green when zero or above, red when negative
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount)
    } else {
        format!("\x1b[32m{}\x1b[0m", amount)
    }
}

/// Format a header line centered in `width`
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Balance headline with the time it was computed
pub fn format_balance_report(total: Money, as_of: DateTime<Local>, colored: bool) -> String {
    let amount = if colored {
        format_money_colored(total)
    } else {
        total.to_string()
    };
    format!(
        "Total Kas: {}\nTerakhir diperbarui: {}\n",
        amount,
        as_of.format("%d/%m/%Y %H.%M.%S")
    )
}

/// Monthly breakdown as a table, one row per month
pub fn format_monthly_table(data: &MonthlyData) -> String {
    if data.is_empty() {
        return "Belum ada data bulanan.\n".to_string();
    }

    let width = 52;
    let mut output = String::new();
    output.push_str(&format_header("Rekap Bulanan", width));
    output.push('\n');
    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&format!(
        "{:10} {:>20} {:>20}\n",
        "Bulan", "Kas Masuk", "Kas Keluar"
    ));
    output.push_str(&separator(width));
    output.push('\n');

    for (label, deposits, withdrawals) in data.rows() {
        output.push_str(&format!(
            "{:10} {:>20} {:>20}\n",
            label,
            deposits.to_string(),
            withdrawals.to_string()
        ));
    }

    let total_in: Money = data.deposits.iter().copied().sum();
    let total_out: Money = data.withdrawals.iter().copied().sum();
    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&format!(
        "{:10} {:>20} {:>20}\n",
        "Jumlah",
        total_in.to_string(),
        total_out.to_string()
    ));

    output
}
