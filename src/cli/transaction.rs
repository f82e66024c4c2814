//! Transaction CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_short, format_transaction_table};
use crate::error::FinanceResult;
use crate::models::TransactionId;
use crate::services::{TransactionInput, TransactionService};
use crate::storage::Storage;

use super::FilterArgs;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an income or expense
    Add {
        /// Transaction date (YYYY-MM-DD)
        date: String,
        /// "income" or "expense"
        kind: String,
        /// Category name
        category: String,
        /// Positive amount (e.g., "50" or "49.99")
        amount: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List transactions, oldest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Delete a transaction by ID
    Delete {
        /// Transaction ID (e.g., "12" or "#12")
        id: TransactionId,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            date,
            kind,
            category,
            amount,
            description,
        } => {
            let txn = service.add_from_input(TransactionInput {
                date,
                kind,
                category,
                description,
                amount,
            })?;
            println!("Added {}", format_transaction_short(&txn, symbol));
        }

        TransactionCommands::List { filter } => {
            let filter = filter.to_filter()?;
            let transactions = service.list(&filter)?;
            print!("{}", format_transaction_table(&transactions, symbol));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(id)?;
            println!("Deleted {}", format_transaction_short(&txn, symbol));
        }
    }

    Ok(())
}
