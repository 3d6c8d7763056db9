//! Export module
//!
//! Dumps the full record list in machine-readable formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: the same shape as the durable file

pub mod csv;
pub mod json;

pub use csv::export_expenses_csv;
pub use json::export_expenses_json;
