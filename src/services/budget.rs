//! Budget service
//!
//! Sets, removes and checks monthly limits per category.

use crate::audit::AuditEntry;
use crate::error::FinanceResult;
use crate::models::{Budget, CategoryName, Money};
use crate::reports::{budget_status, BudgetStatus};
use crate::storage::{BudgetUpsert, Storage, TransactionFilter};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly limit for a category, replacing any existing one
    pub fn upsert(&self, category: CategoryName, monthly_limit: Money) -> FinanceResult<Budget> {
        let BudgetUpsert { budget, previous } =
            self.storage.budgets().upsert(category, monthly_limit)?;

        tracing::info!(
            category = %budget.category,
            limit = %budget.monthly_limit,
            replaced = previous.is_some(),
            "set budget"
        );

        self.storage
            .record_audit(AuditEntry::budget_set(previous.as_ref(), &budget));

        Ok(budget)
    }

    /// Parse raw category and limit text, then upsert
    pub fn upsert_from_input(&self, category: &str, monthly_limit: &str) -> FinanceResult<Budget> {
        let category = CategoryName::new(category)?;
        let monthly_limit = Money::parse(monthly_limit)?;
        self.upsert(category, monthly_limit)
    }

    /// Remove the budget for a category
    pub fn delete(&self, category: &CategoryName) -> FinanceResult<Budget> {
        let budget = self.storage.budgets().delete(category)?;

        tracing::info!(category = %budget.category, "deleted budget");

        self.storage.record_audit(AuditEntry::budget_deleted(&budget));

        Ok(budget)
    }

    /// All budgets, ordered by category
    pub fn list(&self) -> FinanceResult<Vec<Budget>> {
        self.storage.budgets().list()
    }

    /// Compare every budget with the expenses that pass the filter
    pub fn status(&self, filter: &TransactionFilter) -> FinanceResult<Vec<BudgetStatus>> {
        let transactions = self.storage.transactions().list(filter)?;
        let budgets = self.storage.budgets().list()?;
        Ok(budget_status(&transactions, &budgets))
    }
}
