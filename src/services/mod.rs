//! Business logic layer
//!
//! Services sit between the presentation adapters and the storage layer.
//! Each operation is one synchronous load → mutate → save sequence over a
//! private copy of the record list.

pub mod expenses;

pub use expenses::{ExpenseService, SortDirection, SortKey};
