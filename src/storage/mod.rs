//! Storage layer for the finance tracker
//!
//! Keeps the whole ledger in one JSON file. Every mutation is staged on a copy
//! of the in-memory document, written to disk atomically, and only then made
//! visible to readers, so a failed write changes nothing.

pub mod budgets;
pub mod file_io;
pub mod schema;
pub mod transactions;

pub use budgets::{BudgetRepository, BudgetUpsert};
pub use file_io::{read_json, write_json_atomic};
pub use schema::{initialize_storage, LedgerFile, SCHEMA_VERSION};
pub use transactions::{TransactionFilter, TransactionRepository};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::FinancePaths;
use crate::error::{FinanceError, FinanceResult};
use crate::models::CategoryName;

/// Storage gateway owning the ledger file
pub struct Storage {
    /// `None` for in-memory instances
    path: Option<PathBuf>,
    ledger: RwLock<LedgerFile>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the ledger under the given paths, creating it on first use
    pub fn open(paths: &FinancePaths) -> FinanceResult<Self> {
        paths.ensure_directories()?;
        Self::open_file(paths.data_file())
    }

    /// Open a ledger file directly, creating it if absent
    pub fn open_file(path: PathBuf) -> FinanceResult<Self> {
        if initialize_storage(&path)? {
            tracing::info!(path = %path.display(), "created new ledger file");
        }

        let ledger = schema::load_ledger(&path)?;
        tracing::debug!(
            path = %path.display(),
            transactions = ledger.transactions.len(),
            budgets = ledger.budgets.len(),
            "loaded ledger"
        );

        Ok(Self {
            path: Some(path),
            ledger: RwLock::new(ledger),
            audit: None,
        })
    }

    /// A fresh ledger that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            ledger: RwLock::new(LedgerFile::default()),
            audit: None,
        }
    }

    /// Attach an audit logger; mutations made through services get recorded
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Transaction operations
    pub fn transactions(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(self)
    }

    /// Budget operations
    pub fn budgets(&self) -> BudgetRepository<'_> {
        BudgetRepository::new(self)
    }

    /// Every category used by a transaction or a budget
    ///
    /// Sorted case-insensitively, ties broken by exact text.
    pub fn categories(&self) -> FinanceResult<Vec<CategoryName>> {
        self.read(|ledger| {
            let unique: BTreeSet<&CategoryName> = ledger
                .transactions
                .iter()
                .map(|t| &t.category)
                .chain(ledger.budgets.iter().map(|b| &b.category))
                .collect();

            let mut categories: Vec<CategoryName> = unique.into_iter().cloned().collect();
            categories.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
            categories
        })
    }

    /// Run a read-only closure against the current ledger
    pub(crate) fn read<T>(&self, f: impl FnOnce(&LedgerFile) -> T) -> FinanceResult<T> {
        let ledger = self
            .ledger
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(f(&ledger))
    }

    /// Apply a mutation and persist it before it becomes visible
    ///
    /// The closure works on a staged copy. If it fails, or the write fails,
    /// the in-memory ledger and the file are left as they were.
    pub(crate) fn commit<T>(
        &self,
        f: impl FnOnce(&mut LedgerFile) -> FinanceResult<T>,
    ) -> FinanceResult<T> {
        let mut ledger = self
            .ledger
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut staged = ledger.clone();
        let result = f(&mut staged)?;

        if let Some(path) = &self.path {
            write_json_atomic(path, &staged)?;
        }

        *ledger = staged;
        Ok(result)
    }

    /// Append an entry to the audit log, if one is attached
    ///
    /// Called after the mutation is already on disk, so a failure here is
    /// logged and swallowed: the caller's change stands either way.
    pub fn record_audit(&self, entry: AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(error) = logger.append(&entry) {
            tracing::warn!(
                %error,
                operation = %entry.operation,
                "failed to write audit entry"
            );
        }
    }
}
