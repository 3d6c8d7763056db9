//! Expense display formatting
//!
//! Terminal table of indexed records plus small helpers for printing
//! aggregation output.

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::stats::CategoryExtremes;

/// One row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format an indexed record list as a table
///
/// The index column shows each record's position in storage order, which is
/// the handle `edit` and `delete` take.
pub fn format_expense_table(expenses: &[(usize, Expense)]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|(index, e)| ExpenseRow {
            index: *index,
            date: e.date.clone(),
            category: e.category.clone(),
            amount: format!("${:.2}", e.amount),
            note: e.note.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Format a key → amount mapping, one `key: $amount` line per entry
pub fn format_mapping(mapping: &BTreeMap<String, f64>) -> String {
    let mut output = String::new();
    for (key, amount) in mapping {
        output.push_str(&format!("{}: ${:.2}\n", key, amount));
    }
    output
}

/// Format the extreme categories
pub fn format_extremes(extremes: &CategoryExtremes) -> String {
    format!(
        "Highest-spend category: {}\nLowest-spend category: {}\n",
        extremes.highest, extremes.lowest
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_table() {
        let formatted = format_expense_table(&[]);
        assert!(formatted.contains("No expenses recorded"));
    }

    #[test]
    fn test_format_table_contains_fields() {
        let expenses = vec![(0, Expense::with_note("2025-06-01", "Groceries", 50.0, "food"))];
        let formatted = format_expense_table(&expenses);

        assert!(formatted.contains("2025-06-01"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("$50.00"));
        assert!(formatted.contains("food"));
    }

    #[test]
    fn test_format_mapping() {
        let mut mapping = BTreeMap::new();
        mapping.insert("Groceries".to_string(), 80.0);
        mapping.insert("Transport".to_string(), 15.0);

        let formatted = format_mapping(&mapping);
        assert_eq!(formatted, "Groceries: $80.00\nTransport: $15.00\n");
    }

    #[test]
    fn test_format_extremes() {
        let extremes = CategoryExtremes {
            highest: "Utilities".into(),
            lowest: "Transport".into(),
        };
        let formatted = format_extremes(&extremes);
        assert!(formatted.contains("Highest-spend category: Utilities"));
        assert!(formatted.contains("Lowest-spend category: Transport"));
    }
}
