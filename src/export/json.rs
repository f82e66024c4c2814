//! JSON export
//!
//! Dumps the whole ledger with a small metadata block.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Transaction, DATE_FORMAT};
use crate::storage::{Storage, TransactionFilter};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions, oldest first
    pub transactions: Vec<Transaction>,

    /// All budgets, ordered by category
    pub budgets: Vec<Budget>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    /// Date of the earliest transaction
    pub earliest_transaction: Option<String>,
    /// Date of the latest transaction
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot everything in storage
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        let transactions = storage.transactions().list(&TransactionFilter::new())?;
        let budgets = storage.budgets().list()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.format(DATE_FORMAT).to_string());
        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.format(DATE_FORMAT).to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
            metadata,
        })
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, CategoryName, Money, NewTransaction, TransactionKind};

    #[test]
    fn test_export_full_json() {
        let storage = Storage::in_memory();
        for (date, cents) in [("2024-03-01", 500), ("2024-01-15", 700)] {
            storage
                .transactions()
                .add(
                    NewTransaction::new(
                        parse_date(date).unwrap(),
                        TransactionKind::Expense,
                        CategoryName::new("Food").unwrap(),
                        None,
                        Money::from_cents(cents),
                    )
                    .unwrap(),
                )
                .unwrap();
        }
        storage
            .budgets()
            .upsert(CategoryName::new("Food").unwrap(), Money::from_cents(6000))
            .unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.metadata.transaction_count, 2);
        assert_eq!(parsed.metadata.budget_count, 1);
        assert_eq!(parsed.metadata.earliest_transaction.as_deref(), Some("2024-01-15"));
        assert_eq!(parsed.metadata.latest_transaction.as_deref(), Some("2024-03-01"));
        assert_eq!(parsed.transactions[0].amount, Money::from_cents(700));
    }

    #[test]
    fn test_export_empty() {
        let storage = Storage::in_memory();
        let mut output = Vec::new();
        export_full_json(&storage, &mut output, false).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert!(parsed.transactions.is_empty());
        assert_eq!(parsed.metadata.earliest_transaction, None);
    }
}
