//! Income and expense per calendar month

use std::collections::BTreeMap;

use crate::models::{Money, Month, Transaction, TransactionKind};

/// Totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    fn empty(month: Month) -> Self {
        Self {
            month,
            income: Money::zero(),
            expense: Money::zero(),
        }
    }

    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// One entry per month present in the data, oldest first
///
/// Months without any transaction are not filled in.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut by_month: BTreeMap<Month, MonthlyTotals> = BTreeMap::new();

    for txn in transactions {
        let month = Month::of(txn.date);
        let entry = by_month
            .entry(month)
            .or_insert_with(|| MonthlyTotals::empty(month));
        match txn.kind {
            TransactionKind::Income => entry.income += txn.amount,
            TransactionKind::Expense => entry.expense += txn.amount,
        }
    }

    by_month.into_values().collect()
}

/// Format a monthly series for terminal display
pub fn format_monthly_terminal(series: &[MonthlyTotals], symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:>14} {:>14} {:>14}\n",
        "Month", "Income", "Expenses", "Net"
    ));
    output.push_str(&"-".repeat(53));
    output.push('\n');

    for row in series {
        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14}\n",
            row.month,
            row.income.format_with_symbol(symbol),
            row.expense.format_with_symbol(symbol),
            row.net().format_with_symbol(symbol)
        ));
    }

    output
}
