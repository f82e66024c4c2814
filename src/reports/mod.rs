//! Reports module
//!
//! Read-only aggregations over snapshots of transactions and budgets: totals,
//! expense by category, the monthly series and budget status. Every function
//! here is pure and works on integer cents; rounding only happens when a
//! report is formatted.

pub mod budget_status;
pub mod categories;
pub mod monthly;
pub mod summary;

pub use budget_status::{budget_status, BudgetStatus};
pub use categories::{expense_by_category, CategoryBreakdown, CategorySpending};
pub use monthly::{format_monthly_terminal, monthly_series, MonthlyTotals};
pub use summary::{net_balance, total_expense, total_income, Summary};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{
        parse_date, CategoryName, Money, NewTransaction, Transaction, TransactionId,
        TransactionKind,
    };

    pub fn txn(id: u64, date: &str, kind: TransactionKind, category: &str, cents: i64) -> Transaction {
        let new = NewTransaction::new(
            parse_date(date).unwrap(),
            kind,
            CategoryName::new(category).unwrap(),
            None,
            Money::from_cents(cents),
        )
        .unwrap();
        Transaction::from_new(TransactionId::new(id), new)
    }

    /// Salary in January, food in January and February
    pub fn sample_transactions() -> Vec<Transaction> {
        vec![
            txn(1, "2024-01-05", TransactionKind::Income, "Salary", 100000),
            txn(2, "2024-01-10", TransactionKind::Expense, "Food", 5000),
            txn(3, "2024-02-01", TransactionKind::Expense, "Food", 3000),
        ]
    }
}
