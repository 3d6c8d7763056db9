//! CLI commands for aggregate queries
//!
//! Formatted prints of the aggregator's outputs: grand total, category
//! breakdown, spending trend, extreme categories, and the overview summary.

use crate::display::{format_extremes, format_mapping};
use crate::error::TrackerResult;
use crate::reports::OverviewReport;
use crate::services::ExpenseService;
use crate::stats::ExpenseStats;
use crate::storage::ExpenseStore;

/// Handle the `total` command
pub fn handle_total(store: &ExpenseStore) -> TrackerResult<()> {
    let expenses = ExpenseService::new(store).list()?;
    let stats = ExpenseStats::new(&expenses);
    println!("Total expenses: ${:.2}", stats.total());
    Ok(())
}

/// Handle the `by-category` command
pub fn handle_by_category(store: &ExpenseStore) -> TrackerResult<()> {
    let expenses = ExpenseService::new(store).list()?;
    let stats = ExpenseStats::new(&expenses);
    print!("{}", format_mapping(&stats.by_category()));
    Ok(())
}

/// Handle the `trend` command
pub fn handle_trend(store: &ExpenseStore, monthly: bool) -> TrackerResult<()> {
    let expenses = ExpenseService::new(store).list()?;
    let stats = ExpenseStats::new(&expenses);
    print!("{}", format_mapping(&stats.trend(monthly)));
    Ok(())
}

/// Handle the `extremes` command
pub fn handle_extremes(store: &ExpenseStore) -> TrackerResult<()> {
    let expenses = ExpenseService::new(store).list()?;
    let stats = ExpenseStats::new(&expenses);
    print!("{}", format_extremes(&stats.extremes()));
    Ok(())
}

/// Handle the `summary` command
pub fn handle_summary(store: &ExpenseStore) -> TrackerResult<()> {
    let expenses = ExpenseService::new(store).list()?;
    let report = OverviewReport::generate(&expenses);
    print!("{}", report.format_terminal());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use tempfile::TempDir;

    #[test]
    fn test_reports_run_over_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));

        handle_total(&store).unwrap();
        handle_by_category(&store).unwrap();
        handle_trend(&store, true).unwrap();
        handle_extremes(&store).unwrap();
        handle_summary(&store).unwrap();
    }

    #[test]
    fn test_reports_run_over_populated_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        store
            .save(&[
                Expense::new("2025-06-01", "Groceries", 50.0),
                Expense::new("2025-07-15", "Utilities", 100.0),
            ])
            .unwrap();

        handle_total(&store).unwrap();
        handle_by_category(&store).unwrap();
        handle_trend(&store, false).unwrap();
        handle_extremes(&store).unwrap();
        handle_summary(&store).unwrap();
    }
}
