//! Transaction service
//!
//! Turns user input into stored transactions, and records every change in the
//! audit log and the diagnostic log. An audit write that fails after the
//! ledger commit is only a warning; the stored change is still returned.

use crate::audit::AuditEntry;
use crate::error::FinanceResult;
use crate::models::{
    parse_date, CategoryName, Money, NewTransaction, Transaction, TransactionId, TransactionKind,
};
use crate::storage::{Storage, TransactionFilter};

/// Raw text input for a new transaction, as typed by a user
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub description: Option<String>,
    pub amount: String,
}

impl TransactionInput {
    /// Parse every field, failing on the first invalid one
    pub fn parse(&self) -> FinanceResult<NewTransaction> {
        let date = parse_date(&self.date)?;
        let kind: TransactionKind = self.kind.parse()?;
        let category = CategoryName::new(self.category.as_str())?;
        let amount = Money::parse(&self.amount)?;

        Ok(NewTransaction::new(
            date,
            kind,
            category,
            self.description.clone(),
            amount,
        )?)
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a validated transaction
    pub fn add(&self, new: NewTransaction) -> FinanceResult<Transaction> {
        let txn = self.storage.transactions().add(new)?;

        tracing::info!(
            id = %txn.id,
            kind = %txn.kind,
            category = %txn.category,
            amount = %txn.amount,
            "added transaction"
        );

        self.storage.record_audit(AuditEntry::transaction_added(&txn));

        Ok(txn)
    }

    /// Parse raw input and record it
    pub fn add_from_input(&self, input: TransactionInput) -> FinanceResult<Transaction> {
        let new = input.parse()?;
        self.add(new)
    }

    /// Delete a transaction by id, returning the removed record
    pub fn delete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        let txn = self.storage.transactions().delete(id)?;

        tracing::info!(id = %txn.id, "deleted transaction");

        self.storage.record_audit(AuditEntry::transaction_deleted(&txn));

        Ok(txn)
    }

    /// Get a transaction by id
    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.transactions().get(id)
    }

    /// List transactions matching a filter, oldest first
    pub fn list(&self, filter: &TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        self.storage.transactions().list(filter)
    }
}
