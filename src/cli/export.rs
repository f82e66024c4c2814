//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_budgets_csv, export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Transactions as CSV
    Csv,
    /// Budgets as CSV
    BudgetsCsv,
    /// Full ledger as JSON
    Json,
    /// Full ledger as YAML
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// What to export and in which format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn write_export<W: Write>(storage: &Storage, format: ExportFormat, writer: &mut W) -> FinanceResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(storage, writer),
        ExportFormat::BudgetsCsv => export_budgets_csv(storage, writer),
        ExportFormat::Json => export_full_json(storage, writer, true),
        ExportFormat::Yaml => export_full_yaml(storage, writer),
    }
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> FinanceResult<()> {
    match args.output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                FinanceError::Export(format!("Failed to create file {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;

            tracing::info!(path = %output.display(), format = ?args.format, "exported data");
            eprintln!("Exported to: {}", output.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, args.format, &mut writer)?;
        }
    }

    Ok(())
}
