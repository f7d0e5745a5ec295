//! Ledger CLI commands
//!
//! Recording, listing and deleting transactions, plus the balance and
//! monthly views.

use std::io::{self, BufRead, Write};

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_balance, format_balance_report, format_monthly_table, format_rupiah,
    format_transaction_details, format_transaction_register, ChartSlot,
};
use crate::error::{KasError, KasResult};
use crate::services::{LedgerService, NewTransaction};
use crate::storage::Storage;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Record a deposit or withdrawal
    Add {
        /// Transaction type: setor (deposit) or keluar (withdrawal)
        kind: String,
        /// Description, e.g. "Iuran Januari"
        name: String,
        /// Amount in rupiah, e.g. "5000"
        amount: String,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a single transaction
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show the current balance
    Total {
        /// Color the balance green or red
        #[arg(long)]
        color: bool,
    },
    /// Show deposits and withdrawals per month
    Monthly,
    /// Draw the monthly bar chart
    Chart {
        /// Bar width in characters
        #[arg(short, long, default_value = "40")]
        width: usize,
    },
}

/// Handle a ledger command
pub fn handle_ledger_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LedgerCommands,
) -> KasResult<()> {
    let service = LedgerService::new(&storage.ledger).with_month_names(settings.month_names);

    match cmd {
        LedgerCommands::Add { kind, name, amount } => {
            let input = NewTransaction::from_input(&kind, &name, &amount)?;
            let txn = service.record(input)?;
            let amount = txn.amount.value().unwrap_or_default();

            println!("Transaksi dicatat: {}", txn.name);
            println!("  Nominal: {}", format_rupiah(amount, Some(&txn.kind)));
            println!("  ID: {}", txn.id);
            println!("Total Kas: {}", format_balance(service.total()));
        }

        LedgerCommands::List { limit } => {
            let mut transactions = service.list_newest_first();
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }
            print!(
                "{}",
                format_transaction_register(&transactions, &settings.date_format)
            );
        }

        LedgerCommands::Show { id } => {
            let txn = service
                .find(&id)
                .ok_or_else(|| KasError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn));
        }

        LedgerCommands::Delete { id, force } => {
            if id.trim().is_empty() {
                return Ok(());
            }

            if !force && !confirm("Yakin ingin menghapus transaksi ini?")? {
                println!("Dibatalkan.");
                return Ok(());
            }

            match service.delete(&id)? {
                0 => println!("Tidak ada transaksi dengan ID {}", id.trim()),
                removed => println!("Menghapus {} transaksi.", removed),
            }
        }

        LedgerCommands::Total { color } => {
            print!("{}", format_balance_report(service.total(), Local::now(), color));
        }

        LedgerCommands::Monthly => {
            print!("{}", format_monthly_table(&service.monthly()));
        }

        LedgerCommands::Chart { width } => {
            let mut slot = ChartSlot::with_width(width);
            match slot.render(&service.monthly()) {
                Some(chart) => print!("{}", chart.render()),
                None => println!("Belum ada data bulanan."),
            }
        }
    }

    Ok(())
}

/// Ask a yes/no question on stdin; anything but "y"/"ya" means no
fn confirm(question: &str) -> KasResult<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "ya" | "yes"
    ))
}
