//! Audit log records
//!
//! An entry pairs a timestamp and operation with a [`Change`], which names the
//! affected transaction or budget by its own key and carries the typed record
//! on either side of the mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Budget, CategoryName, Transaction, TransactionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        })
    }
}

/// The record a mutation touched, keyed the way storage keys it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "lowercase")]
pub enum Change {
    Transaction {
        id: TransactionId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        before: Option<Transaction>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after: Option<Transaction>,
    },
    Budget {
        category: CategoryName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        before: Option<Budget>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        after: Option<Budget>,
    },
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub change: Change,
}

impl AuditEntry {
    fn now(operation: Operation, change: Change) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            change,
        }
    }

    pub fn transaction_added(txn: &Transaction) -> Self {
        Self::now(
            Operation::Create,
            Change::Transaction {
                id: txn.id,
                before: None,
                after: Some(txn.clone()),
            },
        )
    }

    pub fn transaction_deleted(txn: &Transaction) -> Self {
        Self::now(
            Operation::Delete,
            Change::Transaction {
                id: txn.id,
                before: Some(txn.clone()),
                after: None,
            },
        )
    }

    /// A budget write; an update when a previous limit existed
    pub fn budget_set(previous: Option<&Budget>, budget: &Budget) -> Self {
        let operation = if previous.is_some() {
            Operation::Update
        } else {
            Operation::Create
        };
        Self::now(
            operation,
            Change::Budget {
                category: budget.category.clone(),
                before: previous.cloned(),
                after: Some(budget.clone()),
            },
        )
    }

    pub fn budget_deleted(budget: &Budget) -> Self {
        Self::now(
            Operation::Delete,
            Change::Budget {
                category: budget.category.clone(),
                before: Some(budget.clone()),
                after: None,
            },
        )
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        )?;

        match &self.change {
            Change::Transaction { id, before, after } => match after.as_ref().or(before.as_ref()) {
                Some(txn) => write!(f, "transaction {}", txn),
                None => write!(f, "transaction #{}", id),
            },
            Change::Budget {
                category,
                before,
                after,
            } => match (before, after) {
                (Some(old), Some(new)) => write!(
                    f,
                    "budget {}: {} -> {} per month",
                    category, old.monthly_limit, new.monthly_limit
                ),
                (_, Some(budget)) | (Some(budget), None) => write!(f, "budget {}", budget),
                (None, None) => write!(f, "budget {}", category),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionKind};
    use chrono::NaiveDate;

    fn food_expense() -> Transaction {
        let new = NewTransaction::new(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            TransactionKind::Expense,
            CategoryName::new("Food").unwrap(),
            None,
            Money::from_cents(3000),
        )
        .unwrap();
        Transaction::from_new(TransactionId::new(3), new)
    }

    fn food_budget(cents: i64) -> Budget {
        Budget::new(CategoryName::new("Food").unwrap(), Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_transaction_entries_carry_the_id() {
        let txn = food_expense();

        let added = AuditEntry::transaction_added(&txn);
        assert_eq!(added.operation, Operation::Create);
        assert!(matches!(
            &added.change,
            Change::Transaction { id, before: None, after: Some(after) }
                if *id == TransactionId::new(3) && after == &txn
        ));
        assert!(added
            .to_string()
            .ends_with("CREATE transaction #3 2024-02-01 Expense Food 30.00"));

        let deleted = AuditEntry::transaction_deleted(&txn);
        assert_eq!(deleted.operation, Operation::Delete);
        assert!(deleted.to_string().contains("DELETE transaction #3"));
    }

    #[test]
    fn test_budget_set_picks_operation() {
        let old = food_budget(6000);
        let new = food_budget(8000);

        let created = AuditEntry::budget_set(None, &old);
        assert_eq!(created.operation, Operation::Create);
        assert!(created.to_string().contains("CREATE budget Food: 60.00 per month"));

        let updated = AuditEntry::budget_set(Some(&old), &new);
        assert_eq!(updated.operation, Operation::Update);
        assert!(updated
            .to_string()
            .contains("UPDATE budget Food: 60.00 -> 80.00 per month"));
    }

    #[test]
    fn test_json_line_shape() {
        let entry = AuditEntry::budget_deleted(&food_budget(6000));
        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"operation\":\"delete\""));
        assert!(line.contains("\"entity\":\"budget\""));
        assert!(line.contains("\"category\":\"Food\""));
        assert!(!line.contains("\"after\""));

        let parsed: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, entry);
    }
}
