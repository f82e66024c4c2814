//! Configuration module for the finance tracker
//!
//! This module provides configuration management including:
//! - Path resolution for the ledger, settings and audit files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
