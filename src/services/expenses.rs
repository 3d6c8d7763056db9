//! Expense mutation and listing service
//!
//! Owns the load → mutate → save cycle shared by the CLI and the web
//! routes. Mutations are addressed by position in the freshly loaded list;
//! an out-of-range index is a logged no-op, never an error.

use std::fmt;

use clap::ValueEnum;
use log::warn;
use serde::Deserialize;

use crate::error::TrackerResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Field to sort the record list by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Sort by date string
    #[default]
    Date,
    /// Sort by category, case-insensitively
    Category,
    /// Sort by amount
    Amount,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// The opposite direction, used for toggle links in the list view
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Category => write!(f, "category"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Service for reading and mutating the expense list
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a service over a store
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Load the current expense list
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.store.load()
    }

    /// Load the list paired with positional indices, sorted for display
    ///
    /// The index attached to each record is its position in storage order,
    /// which is what the edit and delete operations address.
    pub fn list_sorted(
        &self,
        key: SortKey,
        direction: SortDirection,
    ) -> TrackerResult<Vec<(usize, Expense)>> {
        let expenses = self.store.load()?;
        let mut indexed: Vec<(usize, Expense)> = expenses.into_iter().enumerate().collect();

        match key {
            SortKey::Date => indexed.sort_by(|a, b| a.1.date.cmp(&b.1.date)),
            SortKey::Category => indexed.sort_by(|a, b| {
                a.1.category
                    .to_lowercase()
                    .cmp(&b.1.category.to_lowercase())
            }),
            SortKey::Amount => indexed.sort_by(|a, b| a.1.amount.total_cmp(&b.1.amount)),
        }

        if direction == SortDirection::Desc {
            indexed.reverse();
        }

        Ok(indexed)
    }

    /// Append a new expense and persist the full list
    pub fn add(&self, expense: Expense) -> TrackerResult<()> {
        let mut expenses = self.store.load()?;
        expenses.push(expense);
        self.store.save(&expenses)
    }

    /// Replace the record at `index`, returning whether anything changed
    ///
    /// An out-of-range index leaves the list untouched and returns
    /// `Ok(false)`.
    pub fn edit(&self, index: usize, expense: Expense) -> TrackerResult<bool> {
        let mut expenses = self.store.load()?;
        match expenses.get_mut(index) {
            Some(slot) => {
                *slot = expense;
                self.store.save(&expenses)?;
                Ok(true)
            }
            None => {
                warn!(
                    "edit ignored: index {} out of range for {} expenses",
                    index,
                    expenses.len()
                );
                Ok(false)
            }
        }
    }

    /// Remove the record at `index`, returning whether anything changed
    ///
    /// An out-of-range index leaves the list untouched and returns
    /// `Ok(false)`.
    pub fn delete(&self, index: usize) -> TrackerResult<bool> {
        let mut expenses = self.store.load()?;
        if index >= expenses.len() {
            warn!(
                "delete ignored: index {} out of range for {} expenses",
                index,
                expenses.len()
            );
            return Ok(false);
        }
        expenses.remove(index);
        self.store.save(&expenses)?;
        Ok(true)
    }

    /// Fetch the record at `index`, if any
    pub fn get(&self, index: usize) -> TrackerResult<Option<Expense>> {
        Ok(self.store.load()?.into_iter().nth(index))
    }
}
