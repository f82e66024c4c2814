//! Category service

use crate::error::FinanceResult;
use crate::models::CategoryName;
use crate::storage::Storage;

/// Service for category lookups
///
/// Categories are not stored on their own; they are whatever names the
/// recorded transactions and budgets use.
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Every category in use, sorted case-insensitively
    pub fn list(&self) -> FinanceResult<Vec<CategoryName>> {
        self.storage.categories()
    }
}
