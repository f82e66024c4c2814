//! Core data models for the finance tracker
//!
//! This module contains the data structures that represent the domain:
//! transactions, budgets, category names, months and money amounts.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{CategoryName, CategoryValidationError, MAX_CATEGORY_NAME_LEN};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use transaction::{
    parse_date, NewTransaction, Transaction, TransactionKind, TransactionValidationError,
    DATE_FORMAT,
};
