//! Service layer for the finance tracker
//!
//! Each user action is one method with typed input and a typed result. The
//! services parse raw input, call the storage layer, and record the change in
//! the audit log.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use transaction::{TransactionInput, TransactionService};
