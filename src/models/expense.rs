//! Expense model
//!
//! A single spending record. Dates are kept as `YYYY-MM-DD` strings and are
//! never calendar-validated; lexicographic order on them doubles as
//! chronological order. Categories are free-form and case-sensitive.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single expense record
///
/// Records carry no identity field. When a record is edited or deleted it is
/// addressed by its position in the loaded list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Date in `YYYY-MM-DD` form
    pub date: String,

    /// Free-form grouping key
    pub category: String,

    /// Amount spent (negative values are legal)
    pub amount: f64,

    /// Optional note
    #[serde(default)]
    pub note: String,
}

impl Expense {
    /// Create a new expense with an empty note
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            note: String::new(),
        }
    }

    /// Create a new expense with a note
    pub fn with_note(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            note: note.into(),
        }
    }

    /// The `YYYY-MM` prefix of the date, used for monthly grouping
    ///
    /// Dates shorter than seven characters yield themselves unchanged. The
    /// cut respects char boundaries, so unusual date strings cannot panic.
    pub fn month(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.note.is_empty() {
            write!(f, "{} {} ${:.2}", self.date, self.category, self.amount)
        } else {
            write!(
                f,
                "{} {} ${:.2} ({})",
                self.date, self.category, self.amount, self.note
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_empty_note() {
        let e = Expense::new("2025-06-01", "Groceries", 50.0);
        assert_eq!(e.note, "");
        assert_eq!(e.amount, 50.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let e = Expense::with_note("2025-06-01", "Groceries", 50.0, "food");
        let json = serde_json::to_string(&e).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }

    #[test]
    fn test_note_defaults_when_missing() {
        let json = r#"{"date": "2025-06-01", "category": "Groceries", "amount": 50.0}"#;
        let e: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(e.note, "");
    }

    #[test]
    fn test_month_prefix() {
        let e = Expense::new("2025-06-15", "Groceries", 30.0);
        assert_eq!(e.month(), "2025-06");
    }

    #[test]
    fn test_month_of_short_date() {
        let e = Expense::new("2025", "Groceries", 30.0);
        assert_eq!(e.month(), "2025");
    }

    #[test]
    fn test_display_with_note() {
        let e = Expense::with_note("2025-06-01", "Groceries", 50.0, "food");
        assert_eq!(e.to_string(), "2025-06-01 Groceries $50.00 (food)");
    }
}
