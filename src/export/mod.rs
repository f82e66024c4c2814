//! Export module
//!
//! Dumps stored data in several formats:
//! - CSV: transactions or budgets (spreadsheet-compatible)
//! - JSON: the full ledger, machine-readable
//! - YAML: the full ledger, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_budgets_csv, export_transactions_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
