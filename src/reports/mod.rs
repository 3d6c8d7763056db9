//! Reports over the expense list
//!
//! Derived statistics consumed by the dashboard and the `summary`
//! subcommand. Everything here is computed from aggregator outputs; nothing
//! is persisted.

pub mod overview;

pub use overview::OverviewReport;
