//! Ledger file schema and first-run initialization
//!
//! The whole ledger is one JSON document. Creating it is idempotent: an
//! existing file is never overwritten, and a damaged one is reported rather
//! than replaced.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FinanceError;
use crate::models::{Budget, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// The serialized ledger: every transaction and budget plus the id counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerFile {
    pub schema_version: u32,

    /// Next id to hand out; only ever increases
    pub next_transaction_id: TransactionId,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Default for LedgerFile {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            next_transaction_id: TransactionId::FIRST,
            transactions: Vec::new(),
            budgets: Vec::new(),
        }
    }
}

impl LedgerFile {
    /// Check the invariants a well-formed ledger must hold
    pub fn check(&self) -> Result<(), FinanceError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(FinanceError::Storage(format!(
                "Unsupported schema version {} (expected {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }

        let mut ids = HashSet::new();
        for txn in &self.transactions {
            if !ids.insert(txn.id) {
                return Err(corrupt(format!("duplicate transaction id {}", txn.id)));
            }
            if txn.id >= self.next_transaction_id || txn.id < TransactionId::FIRST {
                return Err(corrupt(format!(
                    "transaction id {} outside allocated range",
                    txn.id
                )));
            }
            txn.validate()
                .map_err(|e| corrupt(format!("transaction {}: {}", txn.id, e)))?;
        }

        let mut categories = HashSet::new();
        for budget in &self.budgets {
            if !categories.insert(&budget.category) {
                return Err(corrupt(format!(
                    "duplicate budget for category '{}'",
                    budget.category
                )));
            }
            budget
                .validate()
                .map_err(|e| corrupt(format!("budget '{}': {}", budget.category, e)))?;
        }

        Ok(())
    }
}

fn corrupt(detail: String) -> FinanceError {
    FinanceError::Storage(format!("Corrupt ledger file: {}", detail))
}

/// Create an empty ledger file if none exists
///
/// Returns `true` if a new file was written.
pub fn initialize_storage(path: &Path) -> Result<bool, FinanceError> {
    if !needs_initialization(path) {
        return Ok(false);
    }

    write_json_atomic(path, &LedgerFile::default())?;
    Ok(true)
}

/// Load and verify a ledger file
pub fn load_ledger(path: &Path) -> Result<LedgerFile, FinanceError> {
    let ledger: LedgerFile = read_json(path)?;
    ledger.check()?;
    Ok(ledger)
}

/// Check if storage needs initialization
pub fn needs_initialization(path: &Path) -> bool {
    !path.exists()
}
