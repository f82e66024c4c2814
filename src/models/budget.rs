//! Budget model
//!
//! A budget is a monthly spending limit for one category. There is at most one
//! budget per category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryName;
use super::money::Money;

/// A monthly spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The category this budget covers
    pub category: CategoryName,

    /// Spending limit per month
    pub monthly_limit: Money,

    /// When this budget was last set
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a budget, rejecting non-positive limits
    pub fn new(category: CategoryName, monthly_limit: Money) -> Result<Self, BudgetValidationError> {
        let budget = Self {
            category,
            monthly_limit,
            updated_at: Utc::now(),
        };
        budget.validate()?;
        Ok(budget)
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.monthly_limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.monthly_limit));
        }
        if !self.monthly_limit.is_within_limit() {
            return Err(BudgetValidationError::LimitTooLarge(self.monthly_limit));
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} per month", self.category, self.monthly_limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveLimit(Money),
    LimitTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLimit(limit) => {
                write!(f, "Monthly limit must be a positive number, got {}", limit)
            }
            Self::LimitTooLarge(limit) => {
                write!(f, "Monthly limit {} exceeds the maximum of {}", limit, Money::MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
