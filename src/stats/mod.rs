//! Aggregation over expense records
//!
//! Pure, deterministic queries over a borrowed snapshot of the expense list.
//! Nothing here performs I/O or mutates its input; callers rebuild the
//! aggregator whenever the underlying collection changes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Expense;

/// Highest- and lowest-spending categories
///
/// Both fields are empty strings when there are no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryExtremes {
    /// Category with the largest total
    pub highest: String,
    /// Category with the smallest total
    pub lowest: String,
}

/// Aggregate statistics over a fixed snapshot of expenses
///
/// Holds a reference to the record slice; it does not copy it. All queries
/// are stateless reads.
pub struct ExpenseStats<'a> {
    expenses: &'a [Expense],
}

impl<'a> ExpenseStats<'a> {
    /// Create an aggregator over a record snapshot
    pub fn new(expenses: &'a [Expense]) -> Self {
        Self { expenses }
    }

    /// The records this aggregator was built over
    pub fn expenses(&self) -> &'a [Expense] {
        self.expenses
    }

    /// Sum of all amounts; `0.0` for an empty collection
    pub fn total(&self) -> f64 {
        // `f64`'s `Sum` identity is `-0.0`, so an empty collection would
        // otherwise yield `-0.0` (printing as "-0.00"). Adding `0.0`
        // normalizes negative zero to positive zero without changing any
        // other value, matching the documented contract above.
        let sum: f64 = self.expenses.iter().map(|e| e.amount).sum();
        sum + 0.0
    }

    /// Amounts summed per category
    ///
    /// Keys are exactly the distinct categories present, matched
    /// case-sensitively. The map iterates in lexicographic key order, which
    /// carries no semantic meaning but keeps display output deterministic.
    pub fn by_category(&self) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for e in self.expenses {
            *totals.entry(e.category.clone()).or_insert(0.0) += e.amount;
        }
        totals
    }

    /// Amounts summed per date, or per `YYYY-MM` month when `monthly` is set
    ///
    /// Keys iterate in lexicographic order, which for ISO date strings is
    /// chronological order. Dates shorter than seven characters group under
    /// the whole string when `monthly` is set.
    pub fn trend(&self, monthly: bool) -> BTreeMap<String, f64> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for e in self.expenses {
            let key = if monthly { e.month() } else { e.date.as_str() };
            *totals.entry(key.to_string()).or_insert(0.0) += e.amount;
        }
        totals
    }

    /// Categories with the maximum and minimum totals
    ///
    /// An empty collection yields empty strings for both fields. Ties
    /// resolve to the lexicographically-first category, the first one
    /// encountered while iterating `by_category()`.
    pub fn extremes(&self) -> CategoryExtremes {
        let by_cat = self.by_category();

        let mut highest: Option<(&str, f64)> = None;
        let mut lowest: Option<(&str, f64)> = None;
        for (category, &total) in &by_cat {
            if highest.map_or(true, |(_, best)| total > best) {
                highest = Some((category, total));
            }
            if lowest.map_or(true, |(_, worst)| total < worst) {
                lowest = Some((category, total));
            }
        }

        CategoryExtremes {
            highest: highest.map(|(c, _)| c.to_string()).unwrap_or_default(),
            lowest: lowest.map(|(c, _)| c.to_string()).unwrap_or_default(),
        }
    }
}
