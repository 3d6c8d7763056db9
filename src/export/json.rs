//! JSON export functionality
//!
//! Writes the expense list as pretty-printed JSON, the same shape the
//! durable file uses.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Export all expenses to pretty-printed JSON
pub fn export_expenses_json<W: Write>(expenses: &[Expense], writer: &mut W) -> TrackerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, expenses)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
