//! Path management for the finance tracker
//!
//! All state lives in a single base directory, which defaults to the current
//! working directory:
//!
//! - `finance.json`: transactions and budgets
//! - `finance.config.json`: user settings
//! - `finance.audit.log`: append-only audit trail

use std::path::PathBuf;

use crate::error::FinanceError;

/// Manages all paths used by the finance tracker
#[derive(Debug, Clone)]
pub struct FinancePaths {
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Resolve paths relative to the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            FinanceError::Config(format!("Could not determine working directory: {}", e))
        })?;
        Ok(Self { base_dir })
    }

    /// Create FinancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the ledger file holding transactions and budgets
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("finance.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("finance.config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("finance.audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a ledger file has been created here
    pub fn is_initialized(&self) -> bool {
        self.data_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_file(), temp_dir.path().join("finance.json"));
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("finance.config.json")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("finance.audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().join("nested").join("dir"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
