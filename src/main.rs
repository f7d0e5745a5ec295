use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use kas_kelas::audit::AuditLogger;
use kas_kelas::cli::{handle_export_command, handle_ledger_command, ExportFormat, LedgerCommands};
use kas_kelas::config::{paths::KasPaths, settings::Settings};
use kas_kelas::models::MonthNames;
use kas_kelas::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kas",
    version,
    about = "Class-fund cashbook (kas kelas)",
    long_about = "Records deposits (setor) and withdrawals (keluar) for a class fund, \
                  keeps a running balance and shows a monthly breakdown."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Export the ledger
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Set the month name language (indonesian, english) and save
        #[arg(long)]
        months: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = KasPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::Log { count }) => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(count)?;
            if entries.is_empty() {
                println!("Audit log is empty.");
            }
            for entry in entries {
                println!("{}", entry.summary());
            }
        }
        Some(Commands::Config { months }) => {
            if let Some(months) = months {
                settings.month_names = MonthNames::parse(&months).ok_or_else(|| {
                    anyhow::anyhow!("Unknown month names '{}'. Use indonesian or english.", months)
                })?;
                settings.save(&paths)?;
            }

            println!("kas-kelas Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", storage.ledger.blob().path().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Storage key:   {}", settings.storage_key);
            println!("  Month names:   {}", settings.month_names);
            println!("  Date format:   {}", settings.date_format);
        }
        None => {
            println!("kas-kelas - class-fund cashbook");
            println!();
            println!("Run 'kas --help' for usage information.");
            println!("Run 'kas add setor \"Iuran Januari\" 5000' to record a deposit.");
        }
    }

    Ok(())
}
