//! Overview report
//!
//! Key statistics for the whole expense list: grand total, extreme records,
//! per-record and per-period means, and the extreme spending categories.

use crate::models::Expense;
use crate::stats::ExpenseStats;

/// Derived statistics over the full expense list
///
/// Every field has a documented empty value: extreme records are `None`,
/// category names are empty strings, and all means are `0.0`. No computation
/// divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewReport {
    /// Sum of all amounts
    pub total: f64,
    /// Number of records
    pub count: usize,
    /// Record with the largest amount (first occurrence on ties)
    pub most_expensive: Option<Expense>,
    /// Record with the smallest amount (first occurrence on ties)
    pub cheapest: Option<Expense>,
    /// Mean amount per record
    pub average: f64,
    /// Mean of the monthly trend totals
    pub avg_per_month: f64,
    /// Mean of the daily trend totals
    pub avg_per_day: f64,
    /// Category with the largest total
    pub max_category: String,
    /// Category with the smallest total
    pub min_category: String,
}

impl OverviewReport {
    /// Generate the overview for a record snapshot
    pub fn generate(expenses: &[Expense]) -> Self {
        let stats = ExpenseStats::new(expenses);
        let total = stats.total();

        let most_expensive = extreme_record(expenses, |candidate, best| candidate > best);
        let cheapest = extreme_record(expenses, |candidate, best| candidate < best);

        let average = mean_or_zero(total, expenses.len());

        let monthly = stats.trend(true);
        let avg_per_month = mean_or_zero(monthly.values().sum(), monthly.len());

        let daily = stats.trend(false);
        let avg_per_day = mean_or_zero(daily.values().sum(), daily.len());

        let extremes = stats.extremes();

        Self {
            total,
            count: expenses.len(),
            most_expensive,
            cheapest,
            average,
            avg_per_month,
            avg_per_day,
            max_category: extremes.highest,
            min_category: extremes.lowest,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Expense Overview\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<24} ${:.2}\n", "Total spent:", self.total));
        output.push_str(&format!("{:<24} {}\n", "Records:", self.count));

        if let Some(e) = &self.most_expensive {
            output.push_str(&format!("{:<24} {}\n", "Most expensive:", e));
        }
        if let Some(e) = &self.cheapest {
            output.push_str(&format!("{:<24} {}\n", "Cheapest:", e));
        }

        output.push_str(&format!("{:<24} ${:.2}\n", "Average per record:", self.average));
        output.push_str(&format!("{:<24} ${:.2}\n", "Average per month:", self.avg_per_month));
        output.push_str(&format!("{:<24} ${:.2}\n", "Average per day:", self.avg_per_day));

        if !self.max_category.is_empty() {
            output.push_str(&format!("{:<24} {}\n", "Top category:", self.max_category));
            output.push_str(&format!("{:<24} {}\n", "Smallest category:", self.min_category));
        }

        output
    }
}

/// First record winning the comparison against all others, `None` when empty
fn extreme_record(expenses: &[Expense], beats: fn(f64, f64) -> bool) -> Option<Expense> {
    let mut best: Option<&Expense> = None;
    for e in expenses {
        match best {
            None => best = Some(e),
            Some(current) if beats(e.amount, current.amount) => best = Some(e),
            _ => {}
        }
    }
    best.cloned()
}

fn mean_or_zero(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::with_note("2025-06-01", "Groceries", 50.0, "food"),
            Expense::with_note("2025-06-02", "Transport", 15.0, "bus"),
            Expense::with_note("2025-06-15", "Groceries", 30.0, "snacks"),
            Expense::with_note("2025-07-01", "Entertainment", 40.0, "movies"),
            Expense::with_note("2025-07-15", "Utilities", 100.0, "electric"),
        ]
    }

    #[test]
    fn test_generate_overview() {
        let expenses = sample_expenses();
        let report = OverviewReport::generate(&expenses);

        assert!((report.total - 235.0).abs() < 1e-9);
        assert_eq!(report.count, 5);
        assert_eq!(report.most_expensive.as_ref().unwrap().category, "Utilities");
        assert_eq!(report.cheapest.as_ref().unwrap().category, "Transport");
        assert!((report.average - 47.0).abs() < 1e-9);
        // Monthly totals are 95 and 140; five distinct dates sum to 235.
        assert!((report.avg_per_month - 117.5).abs() < 1e-9);
        assert!((report.avg_per_day - 47.0).abs() < 1e-9);
        assert_eq!(report.max_category, "Utilities");
        assert_eq!(report.min_category, "Transport");
    }

    #[test]
    fn test_generate_empty() {
        let report = OverviewReport::generate(&[]);

        assert_eq!(report.total, 0.0);
        assert_eq!(report.count, 0);
        assert!(report.most_expensive.is_none());
        assert!(report.cheapest.is_none());
        assert_eq!(report.average, 0.0);
        assert_eq!(report.avg_per_month, 0.0);
        assert_eq!(report.avg_per_day, 0.0);
        assert_eq!(report.max_category, "");
        assert_eq!(report.min_category, "");
    }

    #[test]
    fn test_extreme_records_tie_breaks_to_first() {
        let expenses = vec![
            Expense::new("2025-06-01", "First", 10.0),
            Expense::new("2025-06-02", "Second", 10.0),
        ];
        let report = OverviewReport::generate(&expenses);
        assert_eq!(report.most_expensive.unwrap().category, "First");
        assert_eq!(report.cheapest.unwrap().category, "First");
    }

    #[test]
    fn test_format_terminal() {
        let expenses = sample_expenses();
        let report = OverviewReport::generate(&expenses);
        let formatted = report.format_terminal();

        assert!(formatted.contains("$235.00"));
        assert!(formatted.contains("Utilities"));
        assert!(formatted.contains("Average per month"));
    }
}
