//! Category names
//!
//! A category is not stored on its own. It is the label shared by
//! transactions and budgets, so it gets a validated newtype: the same trimming
//! and length rules apply no matter where the name comes from, including
//! data read back from disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest accepted category name, in characters
pub const MAX_CATEGORY_NAME_LEN: usize = 50;

/// A validated, trimmed, non-empty category label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name, trimming surrounding whitespace
    pub fn new(name: impl Into<String>) -> Result<Self, CategoryValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = trimmed.chars().count();
        if len > MAX_CATEGORY_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key for case-insensitive listing ("food" sorts next to "Food")
    pub fn sort_key(&self) -> (String, &str) {
        (self.0.to_lowercase(), &self.0)
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = CategoryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = CategoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(name: CategoryName) -> Self {
        name.0
    }
}

/// Validation errors for category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} chars, max {})",
                len, MAX_CATEGORY_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let name = CategoryName::new("  Food ").unwrap();
        assert_eq!(name.as_str(), "Food");
        assert_eq!(name, CategoryName::new("Food").unwrap());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            CategoryName::new("   "),
            Err(CategoryValidationError::EmptyName)
        );
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "x".repeat(MAX_CATEGORY_NAME_LEN + 1);
        assert_eq!(
            CategoryName::new(long),
            Err(CategoryValidationError::NameTooLong(MAX_CATEGORY_NAME_LEN + 1))
        );
        assert!(CategoryName::new("x".repeat(MAX_CATEGORY_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_case_sensitive_identity() {
        let lower = CategoryName::new("food").unwrap();
        let upper = CategoryName::new("Food").unwrap();
        assert_ne!(lower, upper);
        assert_eq!(lower.sort_key().0, upper.sort_key().0);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CategoryName = serde_json::from_str("\"Rent\"").unwrap();
        assert_eq!(ok.as_str(), "Rent");
        assert!(serde_json::from_str::<CategoryName>("\"  \"").is_err());
    }
}
