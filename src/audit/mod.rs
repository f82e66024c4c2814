//! Audit logging
//!
//! Records every create, update and delete of transactions and budgets in an
//! append-only JSONL file next to the ledger. Services hand entries to
//! `Storage::record_audit` after each successful commit.

mod entry;
mod logger;

pub use entry::{AuditEntry, Change, Operation};
pub use logger::AuditLogger;
