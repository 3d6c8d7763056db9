//! JSON file storage for expense records
//!
//! The store is the only I/O boundary in the system. It reads and writes a
//! single flat JSON array; the whole list is always the unit of persistence.

pub mod file_io;

use std::path::PathBuf;

use log::debug;

use crate::error::TrackerResult;
use crate::models::Expense;

use file_io::{read_json, write_json_atomic};

/// Loads and saves the expense list to a single JSON file
///
/// The storage location is injected at construction time; there is no
/// well-known module-level path. Concurrent writers are not coordinated
/// (last save wins), matching the single-user assumption.
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all expenses from disk
    ///
    /// A missing file yields an empty list. A file that exists but does not
    /// parse as an array of records propagates as `TrackerError::Parse`;
    /// nothing is silently repaired or dropped.
    pub fn load(&self) -> TrackerResult<Vec<Expense>> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        debug!("loaded {} expenses from {}", expenses.len(), self.path.display());
        Ok(expenses)
    }

    /// Save the full expense list, overwriting the previous file atomically
    ///
    /// On failure the prior file contents remain intact.
    pub fn save(&self, expenses: &[Expense]) -> TrackerResult<()> {
        write_json_atomic(&self.path, &expenses)?;
        debug!("saved {} expenses to {}", expenses.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        (temp_dir, ExpenseStore::new(path))
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::with_note("2025-06-01", "Groceries", 50.0, "food"),
            Expense::with_note("2025-06-02", "Transport", 15.0, "bus"),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, store) = create_test_store();
        let expenses = sample_expenses();

        store.save(&expenses).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, expenses);
    }

    #[test]
    fn test_load_is_idempotent() {
        let (_temp_dir, store) = create_test_store();
        store.save(&sample_expenses()).unwrap();

        let first = store.load().unwrap();
        let second = store.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let (_temp_dir, store) = create_test_store();
        store.save(&sample_expenses()).unwrap();

        let shorter = vec![Expense::new("2025-07-01", "Entertainment", 40.0)];
        store.save(&shorter).unwrap();

        assert_eq!(store.load().unwrap(), shorter);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let (temp_dir, store) = create_test_store();
        fs::write(temp_dir.path().join("expenses.json"), r#"{"not": "a list"}"#).unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let (temp_dir, store) = create_test_store();
        // Records must carry date, category, and amount; note is optional.
        fs::write(
            temp_dir.path().join("expenses.json"),
            r#"[{"date": "2025-06-01", "category": "Groceries"}]"#,
        )
        .unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_disk_format_is_bare_array() {
        let (temp_dir, store) = create_test_store();
        store
            .save(&[Expense::new("2025-06-01", "Groceries", 50.0)])
            .unwrap();

        let raw = fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().expect("expected a top-level JSON array");
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["date"], "2025-06-01");
        assert_eq!(array[0]["note"], "");
    }
}
