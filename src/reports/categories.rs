//! Expense breakdown by category
//!
//! Feeds the category chart. Income never shows up here.

use std::collections::BTreeMap;

use crate::models::{CategoryName, Money, Transaction};

/// Summed expense per category; zero-sum categories are left out
pub fn expense_by_category(transactions: &[Transaction]) -> BTreeMap<CategoryName, Money> {
    let mut totals: BTreeMap<CategoryName, Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(txn.category.clone()).or_default() += txn.amount;
    }

    totals.retain(|_, total| !total.is_zero());
    totals
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: CategoryName,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of total expense, 0-100
    pub percentage: f64,
}

/// Expense per category, largest first
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub categories: Vec<CategorySpending>,
    pub total_expense: Money,
}

impl CategoryBreakdown {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let totals = expense_by_category(transactions);
        let total_expense: Money = totals.values().sum();

        let mut counts: BTreeMap<&CategoryName, usize> = BTreeMap::new();
        for txn in transactions.iter().filter(|t| t.is_expense()) {
            *counts.entry(&txn.category).or_default() += 1;
        }

        let mut categories: Vec<CategorySpending> = totals
            .iter()
            .map(|(category, total)| {
                let percentage = if total_expense.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / total_expense.cents() as f64) * 100.0
                };
                CategorySpending {
                    category: category.clone(),
                    total: *total,
                    transaction_count: counts.get(category).copied().unwrap_or(0),
                    percentage,
                }
            })
            .collect();

        // Most spending first; equal totals keep name order
        categories.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Self {
            categories,
            total_expense,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<30} {:>12} {:>6} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(58));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6} {:>6.1}%\n",
                row.category,
                row.total.format_with_symbol(symbol),
                row.transaction_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(58));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12}\n",
            "TOTAL EXPENSES",
            self.total_expense.format_with_symbol(symbol)
        ));

        output
    }
}
