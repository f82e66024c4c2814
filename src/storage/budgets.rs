//! Budget persistence
//!
//! Budgets are keyed by category: upserting replaces the existing row for
//! that category instead of adding a second one.

use chrono::Utc;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, CategoryName, Money};

use super::Storage;

/// Outcome of an upsert: the stored budget and the one it replaced
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUpsert {
    pub budget: Budget,
    pub previous: Option<Budget>,
}

/// Budget operations on a [`Storage`]
pub struct BudgetRepository<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetRepository<'a> {
    pub(super) fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Insert or replace the budget for a category
    pub fn upsert(&self, category: CategoryName, monthly_limit: Money) -> FinanceResult<BudgetUpsert> {
        let budget = Budget::new(category, monthly_limit)?;

        self.storage.commit(|ledger| {
            let previous = match ledger
                .budgets
                .iter_mut()
                .find(|b| b.category == budget.category)
            {
                Some(existing) => {
                    let previous = existing.clone();
                    existing.monthly_limit = budget.monthly_limit;
                    existing.updated_at = Utc::now();
                    Some(previous)
                }
                None => {
                    ledger.budgets.push(budget.clone());
                    None
                }
            };

            let stored = ledger
                .budgets
                .iter()
                .find(|b| b.category == budget.category)
                .cloned()
                .unwrap_or(budget);

            Ok(BudgetUpsert {
                budget: stored,
                previous,
            })
        })
    }

    /// Delete the budget for a category, returning it
    pub fn delete(&self, category: &CategoryName) -> FinanceResult<Budget> {
        self.storage.commit(|ledger| {
            let position = ledger
                .budgets
                .iter()
                .position(|b| &b.category == category)
                .ok_or_else(|| FinanceError::budget_not_found(category.as_str()))?;
            Ok(ledger.budgets.remove(position))
        })
    }

    pub fn get(&self, category: &CategoryName) -> FinanceResult<Option<Budget>> {
        self.storage.read(|ledger| {
            ledger
                .budgets
                .iter()
                .find(|b| &b.category == category)
                .cloned()
        })
    }

    /// All budgets ordered by category
    pub fn list(&self) -> FinanceResult<Vec<Budget>> {
        self.storage.read(|ledger| {
            let mut budgets = ledger.budgets.clone();
            budgets.sort_by(|a, b| a.category.cmp(&b.category));
            budgets
        })
    }
}
