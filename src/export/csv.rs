//! CSV export functionality
//!
//! Writes the expense list as spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> TrackerResult<()> {
    writeln!(writer, "Date,Category,Amount,Note")
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{:.2},{}",
            escape_csv(&expense.date),
            escape_csv(&expense.category),
            expense.amount,
            escape_csv(&expense.note)
        )
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Quote a field if it contains a comma, quote, or newline
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
