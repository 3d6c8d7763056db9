//! Core data models for the expense tracker
//!
//! The domain is a single record type: an expense with a date, a category,
//! an amount, and an optional note.

pub mod expense;

pub use expense::Expense;
