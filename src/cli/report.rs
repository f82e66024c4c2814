//! Report and chart CLI commands
//!
//! Both load a snapshot through the transaction service and hand it to the
//! aggregation functions; charts only differ in how the result is drawn.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{category_chart, monthly_chart};
use crate::error::FinanceResult;
use crate::models::Transaction;
use crate::reports::{format_monthly_terminal, monthly_series, CategoryBreakdown, Summary};
use crate::services::TransactionService;
use crate::storage::{Storage, TransactionFilter};

use super::parse_month;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total income, expenses and balance
    Summary {
        /// Restrict to one month (e.g., "2025-01", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Expenses per category
    Categories {
        /// Restrict to one month (e.g., "2025-01", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Income and expenses per month
    Monthly,
}

/// Chart subcommands
#[derive(Subcommand)]
pub enum ChartCommands {
    /// Bar chart of expenses per category
    Categories {
        /// Restrict to one month (e.g., "2025-01", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Bar chart of income and expenses per month
    Monthly,
}

/// Load the transactions for an optional month, printing the report title
fn load_snapshot(
    storage: &Storage,
    title: &str,
    month: Option<&str>,
) -> FinanceResult<Vec<Transaction>> {
    let filter = match month.map(parse_month).transpose()? {
        Some(m) => {
            println!("{}: {}", title, m.friendly());
            TransactionFilter::new().month(m)
        }
        None => {
            println!("{}: all time", title);
            TransactionFilter::new()
        }
    };
    println!("{}", "=".repeat(40));

    TransactionService::new(storage).list(&filter)
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { month } => {
            let transactions = load_snapshot(storage, "Summary", month.as_deref())?;
            print!("{}", Summary::from_transactions(&transactions).format_terminal(symbol));
        }

        ReportCommands::Categories { month } => {
            let transactions = load_snapshot(storage, "Expenses by category", month.as_deref())?;
            let breakdown = CategoryBreakdown::from_transactions(&transactions);
            if breakdown.is_empty() {
                println!("No expenses recorded.");
            } else {
                print!("{}", breakdown.format_terminal(symbol));
            }
        }

        ReportCommands::Monthly => {
            let transactions = load_snapshot(storage, "Monthly totals", None)?;
            let series = monthly_series(&transactions);
            if series.is_empty() {
                println!("No transactions recorded.");
            } else {
                print!("{}", format_monthly_terminal(&series, symbol));
            }
        }
    }

    Ok(())
}

/// Handle a chart command
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ChartCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let width = settings.chart_width;
    let service = TransactionService::new(storage);

    match cmd {
        ChartCommands::Categories { month } => {
            let mut filter = TransactionFilter::new();
            if let Some(m) = month.as_deref().map(parse_month).transpose()? {
                filter = filter.month(m);
            }
            let transactions = service.list(&filter)?;
            let breakdown = CategoryBreakdown::from_transactions(&transactions);
            print!("{}", category_chart(&breakdown, symbol, width));
        }

        ChartCommands::Monthly => {
            let transactions = service.list(&TransactionFilter::new())?;
            print!("{}", monthly_chart(&monthly_series(&transactions), symbol, width));
        }
    }

    Ok(())
}
