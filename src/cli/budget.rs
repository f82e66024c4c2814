//! Budget CLI commands
//!
//! Setting, removing and checking monthly category limits.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_table, format_status_table};
use crate::error::FinanceResult;
use crate::models::CategoryName;
use crate::services::BudgetService;
use crate::storage::{Storage, TransactionFilter};

use super::parse_month;

/// Width of the usage bar in the status table
const STATUS_BAR_WIDTH: usize = 10;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) the monthly limit for a category
    Set {
        /// Category name
        category: String,
        /// Monthly limit (e.g., "300" or "300.00")
        limit: String,
    },

    /// List all budgets
    List,

    /// Remove the budget for a category
    Delete {
        /// Category name
        category: String,
    },

    /// Compare budgets with actual spending
    Status {
        /// Only count expenses from this month (e.g., "2025-01", "current", "last")
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let budget = service.upsert_from_input(&category, &limit)?;
            println!(
                "Budget for '{}' set to {} per month",
                budget.category,
                budget.monthly_limit.format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            let budgets = service.list()?;
            print!("{}", format_budget_table(&budgets, symbol));
        }

        BudgetCommands::Delete { category } => {
            let category = CategoryName::new(category)?;
            let budget = service.delete(&category)?;
            println!("Deleted budget for '{}'", budget.category);
        }

        BudgetCommands::Status { month } => {
            let month = month.as_deref().map(parse_month).transpose()?;
            let filter = match month {
                Some(m) => {
                    println!("Budget status: {}\n", m.friendly());
                    TransactionFilter::new().month(m)
                }
                None => {
                    println!("Budget status: all time\n");
                    TransactionFilter::new()
                }
            };

            let statuses = service.status(&filter)?;
            print!("{}", format_status_table(&statuses, symbol, STATUS_BAR_WIDTH));
        }
    }

    Ok(())
}
