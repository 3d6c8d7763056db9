//! CLI command for chart rendering
//!
//! Renders a chart of the aggregation output to an SVG file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::charts::{bar_chart, line_chart};
use crate::error::{TrackerError, TrackerResult};
use crate::services::ExpenseService;
use crate::stats::ExpenseStats;
use crate::storage::ExpenseStore;

/// What to plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlotKind {
    /// Bar chart of totals by category
    Categories,
    /// Line chart of spending over time
    Trend,
}

/// Handle the `plot` command
///
/// `monthly` only affects the trend plot, matching the CLI surface where
/// the flag is documented as trend-only.
pub fn handle_plot(
    store: &ExpenseStore,
    kind: PlotKind,
    monthly: bool,
    output: Option<PathBuf>,
) -> TrackerResult<()> {
    let expenses = ExpenseService::new(store).list()?;
    let stats = ExpenseStats::new(&expenses);

    let (svg, default_name) = match kind {
        PlotKind::Categories => (
            bar_chart(&stats.by_category(), "Expenses by Category"),
            "categories.svg",
        ),
        PlotKind::Trend => {
            let title = if monthly {
                "Monthly Expense Trend"
            } else {
                "Daily Expense Trend"
            };
            (line_chart(&stats.trend(monthly), title), "trend.svg")
        }
    };

    let path = output.unwrap_or_else(|| PathBuf::from(default_name));
    let file = File::create(&path).map_err(|e| {
        TrackerError::Io(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(svg.as_bytes())
        .map_err(|e| TrackerError::Io(format!("Failed to write chart: {}", e)))?;

    println!("Wrote chart to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use tempfile::TempDir;

    #[test]
    fn test_plot_categories_writes_svg() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        store
            .save(&[Expense::new("2025-06-01", "Groceries", 50.0)])
            .unwrap();

        let out = temp_dir.path().join("chart.svg");
        handle_plot(&store, PlotKind::Categories, false, Some(out.clone())).unwrap();

        let svg = std::fs::read_to_string(out).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Groceries"));
    }

    #[test]
    fn test_plot_monthly_trend() {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        store
            .save(&[
                Expense::new("2025-06-01", "Groceries", 50.0),
                Expense::new("2025-07-01", "Groceries", 30.0),
            ])
            .unwrap();

        let out = temp_dir.path().join("trend.svg");
        handle_plot(&store, PlotKind::Trend, true, Some(out.clone())).unwrap();

        let svg = std::fs::read_to_string(out).unwrap();
        assert!(svg.contains("Monthly Expense Trend"));
        assert!(svg.contains("2025-06"));
    }
}
