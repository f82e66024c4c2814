//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_chart_command, handle_report_command, ChartCommands, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use clap::Args;

use crate::error::FinanceResult;
use crate::models::{parse_date, CategoryName, Month, TransactionKind};
use crate::storage::TransactionFilter;

/// Parse a `--month` value
pub(crate) fn parse_month(s: &str) -> FinanceResult<Month> {
    Ok(Month::parse(s)?)
}

/// Shared transaction filter flags
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Earliest date, inclusive (YYYY-MM-DD)
    #[arg(long, conflicts_with = "month")]
    pub from: Option<String>,

    /// Latest date, inclusive (YYYY-MM-DD)
    #[arg(long, conflicts_with = "month")]
    pub to: Option<String>,

    /// Single month (e.g., "2025-01", "current", "last")
    #[arg(short, long)]
    pub month: Option<String>,

    /// Only this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only "income" or "expense"
    #[arg(short, long)]
    pub kind: Option<String>,
}

impl FilterArgs {
    /// Validate the flags and build a storage filter
    pub fn to_filter(&self) -> FinanceResult<TransactionFilter> {
        let mut filter = TransactionFilter::new();

        if let Some(month) = &self.month {
            filter = filter.month(parse_month(month)?);
        }
        if let Some(from) = &self.from {
            filter = filter.from(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.to(parse_date(to)?);
        }
        if let Some(category) = &self.category {
            filter = filter.category(CategoryName::new(category.as_str())?);
        }
        if let Some(kind) = &self.kind {
            filter = filter.kind(kind.parse::<TransactionKind>()?);
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_filter_args() {
        assert_eq!(FilterArgs::default().to_filter().unwrap(), TransactionFilter::new());
    }

    #[test]
    fn test_filter_args_month() {
        let args = FilterArgs {
            month: Some("2024-02".into()),
            kind: Some("EXPENSE".into()),
            ..Default::default()
        };
        let filter = args.to_filter().unwrap();
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
    }

    #[test]
    fn test_filter_args_invalid() {
        let bad_date = FilterArgs {
            from: Some("yesterday".into()),
            ..Default::default()
        };
        assert!(bad_date.to_filter().unwrap_err().is_validation());

        let bad_month = FilterArgs {
            month: Some("2024-13".into()),
            ..Default::default()
        };
        assert!(bad_month.to_filter().unwrap_err().is_validation());
    }
}
