//! CLI commands for record management
//!
//! Add, list, edit, and delete operations over the expense list. Edit and
//! delete address records by their position in storage order, the index the
//! list view prints.

use crate::display::format_expense_table;
use crate::error::TrackerResult;
use crate::models::Expense;
use crate::services::{ExpenseService, SortDirection, SortKey};
use crate::storage::ExpenseStore;

/// Handle the `add` command
pub fn handle_add(
    store: &ExpenseStore,
    date: Option<String>,
    category: String,
    amount: f64,
    note: String,
) -> TrackerResult<()> {
    let date = date.unwrap_or_else(today);
    let expense = Expense::with_note(date, category, amount, note);

    ExpenseService::new(store).add(expense.clone())?;
    println!("Added: {}", expense);
    Ok(())
}

/// Handle the `list` command
pub fn handle_list(
    store: &ExpenseStore,
    sort: SortKey,
    direction: SortDirection,
) -> TrackerResult<()> {
    let expenses = ExpenseService::new(store).list_sorted(sort, direction)?;
    print!("{}", format_expense_table(&expenses));
    Ok(())
}

/// Handle the `edit` command
pub fn handle_edit(
    store: &ExpenseStore,
    index: usize,
    date: String,
    category: String,
    amount: f64,
    note: String,
) -> TrackerResult<()> {
    let expense = Expense::with_note(date, category, amount, note);

    if ExpenseService::new(store).edit(index, expense)? {
        println!("Updated expense #{}", index);
    } else {
        println!("No expense at index {}; nothing changed.", index);
    }
    Ok(())
}

/// Handle the `delete` command
pub fn handle_delete(store: &ExpenseStore, index: usize) -> TrackerResult<()> {
    if ExpenseService::new(store).delete(index)? {
        println!("Deleted expense #{}", index);
    } else {
        println!("No expense at index {}; nothing changed.", index);
    }
    Ok(())
}

/// Today's date as a `YYYY-MM-DD` string
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_then_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));

        handle_add(
            &store,
            Some("2025-06-01".into()),
            "Groceries".into(),
            50.0,
            "food".into(),
        )
        .unwrap();
        assert_eq!(store.load().unwrap().len(), 1);

        handle_delete(&store, 0).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));

        handle_add(&store, None, "Groceries".into(), 50.0, String::new()).unwrap();

        let expenses = store.load().unwrap();
        assert_eq!(expenses[0].date, today());
    }

    #[test]
    fn test_delete_out_of_range_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));

        // Out-of-range is a no-op, not an error.
        handle_delete(&store, 7).unwrap();
    }
}
