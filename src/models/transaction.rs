//! Transaction model
//!
//! A transaction records a single income or expense event. The amount is
//! always positive; the kind decides which side of the ledger it lands on.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::CategoryName;
use super::ids::TransactionId;
use super::money::Money;

/// Date format used for input and display
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        };
        f.pad(label)
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            _ => Err(TransactionValidationError::UnknownKind(s.to_string())),
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, TransactionValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| TransactionValidationError::InvalidDate(s.to_string()))
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by storage
    pub id: TransactionId,

    pub date: NaiveDate,

    pub kind: TransactionKind,

    pub category: CategoryName,

    #[serde(default)]
    pub description: Option<String>,

    /// Always positive
    pub amount: Money,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Assign an id to validated input, producing the stored record
    pub fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Self {
            id,
            date: new.date,
            kind: new.kind,
            category: new.category,
            description: new.description,
            amount: new.amount,
            created_at: Utc::now(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate a stored record
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        check_amount(self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} {}",
            self.id,
            self.date.format(DATE_FORMAT),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Input for recording a transaction; storage assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub category: CategoryName,
    pub description: Option<String>,
    pub amount: Money,
}

impl NewTransaction {
    /// Build and validate a new transaction
    ///
    /// Blank descriptions are stored as `None`.
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        category: CategoryName,
        description: Option<String>,
        amount: Money,
    ) -> Result<Self, TransactionValidationError> {
        let new = Self {
            date,
            kind,
            category,
            description: description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            amount,
        };
        new.validate()?;
        Ok(new)
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        check_amount(self.amount)
    }
}

fn check_amount(amount: Money) -> Result<(), TransactionValidationError> {
    if !amount.is_positive() {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }
    if !amount.is_within_limit() {
        return Err(TransactionValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    UnknownKind(String),
    InvalidDate(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX_AMOUNT)
            }
            Self::UnknownKind(kind) => {
                write!(f, "Unknown transaction kind '{}'. Use Income or Expense", kind)
            }
            Self::InvalidDate(date) => {
                write!(f, "Invalid date '{}'. Use YYYY-MM-DD", date)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> CategoryName {
        CategoryName::new("Food").unwrap()
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!(" EXPENSE ".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!(matches!(
            "transfer".parse::<TransactionKind>(),
            Err(TransactionValidationError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"Income\""
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-05").unwrap(), jan(5));
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("05/01/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_new_transaction_rejects_non_positive() {
        let zero = NewTransaction::new(jan(1), TransactionKind::Expense, food(), None, Money::zero());
        assert_eq!(
            zero,
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        let negative = NewTransaction::new(
            jan(1),
            TransactionKind::Expense,
            food(),
            None,
            Money::from_cents(-500),
        );
        assert!(negative.is_err());
    }

    #[test]
    fn test_blank_description_is_none() {
        let new = NewTransaction::new(
            jan(1),
            TransactionKind::Expense,
            food(),
            Some("   ".into()),
            Money::from_cents(100),
        )
        .unwrap();
        assert_eq!(new.description, None);
    }

    #[test]
    fn test_amount_above_maximum_is_rejected() {
        let too_big = Money::from_cents(Money::MAX_AMOUNT.cents() + 1);
        assert_eq!(
            NewTransaction::new(jan(1), TransactionKind::Income, food(), None, too_big),
            Err(TransactionValidationError::AmountTooLarge(too_big))
        );
        assert!(
            NewTransaction::new(jan(1), TransactionKind::Income, food(), None, Money::MAX_AMOUNT)
                .is_ok()
        );
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let new = NewTransaction::new(
            jan(10),
            TransactionKind::Expense,
            food(),
            Some("groceries".into()),
            Money::from_cents(5000),
        )
        .unwrap();
        let txn = Transaction::from_new(TransactionId::FIRST, new);
        assert!(txn.is_expense());
        assert_eq!(txn.amount.cents(), 5000);
        assert_eq!(txn.description.as_deref(), Some("groceries"));
        assert!(txn.validate().is_ok());
    }
}
