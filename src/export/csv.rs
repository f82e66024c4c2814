//! CSV export
//!
//! Spreadsheet-friendly dumps of transactions and budgets. Amounts are plain
//! decimals with two places and no currency symbol.

use std::io::Write;

use ::csv::Writer;

use crate::error::{FinanceError, FinanceResult};
use crate::models::DATE_FORMAT;
use crate::storage::{Storage, TransactionFilter};

fn export_err(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Export all transactions to CSV, oldest first
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let transactions = storage.transactions().list(&TransactionFilter::new())?;

    let mut csv = Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Kind", "Category", "Description", "Amount"])
        .map_err(export_err)?;

    for txn in &transactions {
        csv.write_record([
            txn.id.to_string(),
            txn.date.format(DATE_FORMAT).to_string(),
            txn.kind.to_string(),
            txn.category.to_string(),
            txn.description.clone().unwrap_or_default(),
            txn.amount.to_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export budgets to CSV, ordered by category
pub fn export_budgets_csv<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let budgets = storage.budgets().list()?;

    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Category", "Monthly Limit"])
        .map_err(export_err)?;

    for budget in &budgets {
        csv.write_record([budget.category.to_string(), budget.monthly_limit.to_string()])
            .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, CategoryName, Money, NewTransaction, TransactionKind};

    fn add(storage: &Storage, date: &str, kind: TransactionKind, category: &str, desc: Option<&str>, cents: i64) {
        storage
            .transactions()
            .add(
                NewTransaction::new(
                    parse_date(date).unwrap(),
                    kind,
                    CategoryName::new(category).unwrap(),
                    desc.map(String::from),
                    Money::from_cents(cents),
                )
                .unwrap(),
            )
            .unwrap();
    }

    #[test]
    fn test_export_transactions_csv() {
        let storage = Storage::in_memory();
        add(&storage, "2024-02-01", TransactionKind::Expense, "Food", Some("Lunch, with Sam"), 3000);
        add(&storage, "2024-01-05", TransactionKind::Income, "Salary", None, 100000);

        let mut output = Vec::new();
        export_transactions_csv(&storage, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Date,Kind,Category,Description,Amount");
        assert_eq!(lines[1], "2,2024-01-05,Income,Salary,,1000.00");
        assert_eq!(lines[2], "1,2024-02-01,Expense,Food,\"Lunch, with Sam\",30.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_budgets_csv() {
        let storage = Storage::in_memory();
        storage
            .budgets()
            .upsert(CategoryName::new("Rent").unwrap(), Money::from_cents(120000))
            .unwrap();
        storage
            .budgets()
            .upsert(CategoryName::new("Food").unwrap(), Money::from_cents(6000))
            .unwrap();

        let mut output = Vec::new();
        export_budgets_csv(&storage, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert_eq!(csv, "Category,Monthly Limit\nFood,60.00\nRent,1200.00\n");
    }

    #[test]
    fn test_export_empty_has_header_only() {
        let storage = Storage::in_memory();
        let mut output = Vec::new();
        export_transactions_csv(&storage, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ID,Date,Kind,Category,Description,Amount\n"
        );
    }
}
