//! Display formatting for terminal output
//!
//! Formats records and aggregation results for the CLI. No aggregation
//! logic lives here.

pub mod expense;

pub use expense::{format_expense_table, format_mapping, format_extremes};
