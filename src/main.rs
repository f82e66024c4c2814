use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::audit::AuditLogger;
use finance_tracker::cli::{
    handle_audit_command, handle_budget_command, handle_category_command, handle_chart_command,
    handle_export_command, handle_report_command, handle_transaction_command, BudgetCommands,
    CategoryCommands, ChartCommands, ExportArgs, ReportCommands, TransactionCommands,
};
use finance_tracker::config::{paths::FinancePaths, settings::Settings};
use finance_tracker::logging;
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Track income, expenses and monthly budgets from the terminal",
    long_about = "Records income and expense transactions in finance.json in the current \
                  directory, keeps a monthly limit per category, and reports totals, \
                  category breakdowns, monthly trends and budget status."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Summaries and breakdowns
    #[command(subcommand)]
    Report(ReportCommands),

    /// Text bar charts
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Export data as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show recent entries from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show or change configuration
    Config {
        /// Currency symbol shown in front of amounts
        #[arg(long)]
        currency: Option<String>,
        /// Width of the longest bar in charts
        #[arg(long)]
        chart_width: Option<usize>,
        /// Turn the audit log on or off
        #[arg(long)]
        audit: Option<bool>,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Finance tracker - income, expenses and budgets");
        println!();
        println!("Run 'finance --help' for usage information.");
        return Ok(());
    };

    let paths = FinancePaths::new()?;

    match command {
        Commands::Audit { count } => handle_audit_command(&paths, count)?,
        Commands::Config {
            currency,
            chart_width,
            audit,
        } => {
            let changed = currency.is_some() || chart_width.is_some() || audit.is_some();
            let mut settings = match Settings::load_or_create(&paths) {
                Ok(settings) => settings,
                // A change rewrites the whole file, which repairs it
                Err(error) if changed => {
                    tracing::warn!(%error, "settings file unreadable, starting from defaults");
                    Settings::default()
                }
                Err(error) => return Err(error.into()),
            };
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
            }
            if let Some(width) = chart_width {
                anyhow::ensure!(width > 0, "chart width must be at least 1");
                settings.chart_width = width;
            }
            if let Some(enabled) = audit {
                settings.audit_enabled = enabled;
            }
            if changed {
                settings.save(&paths)?;
                println!("Settings saved to {}", paths.settings_file().display());
                println!();
            }
            print_config(&paths, &settings);
        }
        command => {
            let settings = Settings::load_or_create(&paths)?;
            run_with_storage(&paths, &settings, command)?;
        }
    }

    Ok(())
}

fn print_config(paths: &FinancePaths, settings: &Settings) {
    println!("Finance Tracker Configuration");
    println!("=============================");
    println!("Data file:     {}", paths.data_file().display());
    println!("Settings file: {}", paths.settings_file().display());
    println!("Audit log:     {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Chart width:     {}", settings.chart_width);
    println!("  Audit enabled:   {}", settings.audit_enabled);
}

fn run_with_storage(paths: &FinancePaths, settings: &Settings, command: Commands) -> Result<()> {
    let mut storage = Storage::open(paths)?;
    if settings.audit_enabled {
        storage = storage.with_audit_log(AuditLogger::new(paths.audit_log()));
    }

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&storage, settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, settings, cmd)?,
        Commands::Category(cmd) => handle_category_command(&storage, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, settings, cmd)?,
        Commands::Chart(cmd) => handle_chart_command(&storage, settings, cmd)?,
        Commands::Export(args) => handle_export_command(&storage, args)?,
        Commands::Audit { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}
