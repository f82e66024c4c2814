//! YAML export, the human-readable variant of the full dump

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full ledger to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# Finance tracker export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryName, Money};

    #[test]
    fn test_export_full_yaml() {
        let storage = Storage::in_memory();
        storage
            .budgets()
            .upsert(CategoryName::new("Food").unwrap(), Money::from_cents(6000))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Finance tracker export"));
        assert!(yaml.contains("budget_count: 1"));

        let parsed: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.budgets[0].category.as_str(), "Food");
        assert_eq!(parsed.budgets[0].monthly_limit, Money::from_cents(6000));
    }
}
