//! Transaction display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Transaction, DATE_FORMAT};

use super::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format(DATE_FORMAT).to_string(),
            kind: txn.kind.to_string(),
            category: txn.category.to_string(),
            description: truncate(txn.description.as_deref().unwrap_or(""), 30),
            amount: txn.amount.format_with_symbol(symbol),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, symbol))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(5)).with(Alignment::right()));

    format!("{}\n{} transaction(s)\n", table, transactions.len())
}

/// One-line confirmation after a transaction is recorded or removed
pub fn format_transaction_short(txn: &Transaction, symbol: &str) -> String {
    let mut line = format!(
        "#{} {} {} {} {}",
        txn.id,
        txn.date.format(DATE_FORMAT),
        txn.kind,
        txn.category,
        txn.amount.format_with_symbol(symbol)
    );
    if let Some(description) = &txn.description {
        line.push_str(&format!(" ({})", description));
    }
    line
}
