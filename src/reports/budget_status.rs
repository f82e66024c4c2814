//! Budget versus actual spending
//!
//! The comparison runs over whatever snapshot it is given; scope the
//! transactions to a month first to get a monthly check.

use std::collections::BTreeMap;

use crate::models::{Budget, CategoryName, Money, Transaction};

use super::categories::expense_by_category;

/// How one budgeted category is doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: CategoryName,
    pub limit: Money,
    pub actual_expense: Money,
    /// limit - actual_expense; negative when over budget
    pub remaining: Money,
    pub over_budget: bool,
}

impl BudgetStatus {
    fn new(budget: &Budget, actual_expense: Money) -> Self {
        let limit = budget.monthly_limit;
        Self {
            category: budget.category.clone(),
            limit,
            actual_expense,
            remaining: limit - actual_expense,
            over_budget: actual_expense > limit,
        }
    }

    /// Portion of the limit already spent, in percent
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            return 0.0;
        }
        self.actual_expense.cents() as f64 / self.limit.cents() as f64 * 100.0
    }
}

/// Compare each budget with the expenses recorded in its category
///
/// One entry per budget, in the order the budgets are given. Spending in
/// categories without a budget is ignored.
pub fn budget_status(transactions: &[Transaction], budgets: &[Budget]) -> Vec<BudgetStatus> {
    let spent: BTreeMap<CategoryName, Money> = expense_by_category(transactions);

    budgets
        .iter()
        .map(|budget| {
            let actual = spent.get(&budget.category).copied().unwrap_or_default();
            BudgetStatus::new(budget, actual)
        })
        .collect()
}
