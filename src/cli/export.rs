//! CLI command for data export
//!
//! Dumps the full record list to stdout or a file in CSV or JSON form.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::models::Expense;
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

/// Handle the `export` command
pub fn handle_export(
    store: &ExpenseStore,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> TrackerResult<()> {
    let expenses = ExpenseService::new(store).list()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&expenses, format, &mut writer)?;
            println!("Exported {} expenses to {}", expenses.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&expenses, format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_csv_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        store
            .save(&[Expense::with_note("2025-06-01", "Groceries", 50.0, "food")])
            .unwrap();

        let out = temp_dir.path().join("dump.csv");
        handle_export(&store, ExportFormat::Csv, Some(out.clone())).unwrap();

        let contents = std::fs::read_to_string(out).unwrap();
        assert!(contents.starts_with("Date,Category,Amount,Note"));
        assert!(contents.contains("Groceries"));
    }

    #[test]
    fn test_export_json_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        let expenses = vec![Expense::new("2025-06-01", "Groceries", 50.0)];
        store.save(&expenses).unwrap();

        let out = temp_dir.path().join("dump.json");
        handle_export(&store, ExportFormat::Json, Some(out.clone())).unwrap();

        let back: Vec<Expense> =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(back, expenses);
    }
}
