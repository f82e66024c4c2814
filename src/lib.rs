//! Finance tracker - personal income, expense and budget tracking
//!
//! This library records income and expense transactions, keeps a monthly
//! spending limit per category, and derives summaries, category breakdowns,
//! monthly series and budget status from the stored data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path and settings management
//! - `error`: Custom error types
//! - `logging`: Diagnostic log subscriber
//! - `models`: Core data models (transactions, budgets, money, months)
//! - `storage`: Single-file JSON ledger with atomic writes
//! - `services`: Command layer used by the CLI
//! - `reports`: Pure aggregations over stored snapshots
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal tables and charts
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::services::{TransactionInput, TransactionService};
//! use finance_tracker::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let txn = TransactionService::new(&storage).add_from_input(TransactionInput {
//!     date: "2024-01-05".into(),
//!     kind: "income".into(),
//!     category: "Salary".into(),
//!     description: None,
//!     amount: "1000.00".into(),
//! })?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
