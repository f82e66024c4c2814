//! Income, expense and balance totals

use crate::models::{Money, Transaction, TransactionKind};

fn total_of(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Sum of all income amounts
pub fn total_income(transactions: &[Transaction]) -> Money {
    total_of(transactions, TransactionKind::Income)
}

/// Sum of all expense amounts
pub fn total_expense(transactions: &[Transaction]) -> Money {
    total_of(transactions, TransactionKind::Expense)
}

/// Income minus expenses
pub fn net_balance(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expense(transactions)
}

/// Totals for one snapshot of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    pub net_balance: Money,
    pub transaction_count: usize,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = total_income(transactions);
        let total_expense = total_expense(transactions);
        Self {
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
            transaction_count: transactions.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Total Income:",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Total Expenses:",
            self.total_expense.format_with_symbol(symbol)
        ));
        output.push_str(&"-".repeat(31));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14}\n",
            "Balance:",
            self.net_balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!("{:<16} {:>14}\n", "Transactions:", self.transaction_count));
        output
    }
}
