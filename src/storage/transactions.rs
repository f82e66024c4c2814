//! Transaction persistence
//!
//! Transactions are listed in date order, ties broken by id, so listings are
//! stable across runs.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryName, Month, NewTransaction, Transaction, TransactionId, TransactionKind};

use super::Storage;

/// Options for filtering transactions; date bounds are inclusive
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub category: Option<CategoryName>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Only transactions on or after this date
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Only transactions on or before this date
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Filter by date range
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from(start).to(end)
    }

    /// Restrict to a single calendar month
    pub fn month(self, month: Month) -> Self {
        self.date_range(month.start_date(), month.end_date())
    }

    pub fn category(mut self, category: CategoryName) -> Self {
        self.category = Some(category);
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Check whether a transaction passes every set criterion
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.date_from.map_or(true, |from| txn.date >= from)
            && self.date_to.map_or(true, |to| txn.date <= to)
            && self.category.as_ref().map_or(true, |c| &txn.category == c)
            && self.kind.map_or(true, |k| txn.kind == k)
    }
}

/// Transaction operations on a [`Storage`]
pub struct TransactionRepository<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionRepository<'a> {
    pub(super) fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction and return it with its assigned id
    pub fn add(&self, new: NewTransaction) -> FinanceResult<Transaction> {
        new.validate()?;

        self.storage.commit(|ledger| {
            let id = ledger.next_transaction_id;
            let txn = Transaction::from_new(id, new);
            ledger.next_transaction_id = id.next();
            ledger.transactions.push(txn.clone());
            Ok(txn)
        })
    }

    /// Delete a transaction, returning the removed record
    pub fn delete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        self.storage.commit(|ledger| {
            let position = ledger
                .transactions
                .iter()
                .position(|t| t.id == id)
                .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;
            Ok(ledger.transactions.remove(position))
        })
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage
            .read(|ledger| ledger.transactions.iter().find(|t| t.id == id).cloned())
    }

    /// List transactions matching the filter, by date then id
    pub fn list(&self, filter: &TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        self.storage.read(|ledger| {
            let mut transactions: Vec<Transaction> = ledger
                .transactions
                .iter()
                .filter(|t| filter.matches(t))
                .cloned()
                .collect();
            transactions.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
            transactions
        })
    }

    /// Count transactions
    pub fn count(&self) -> FinanceResult<usize> {
        self.storage.read(|ledger| ledger.transactions.len())
    }
}
