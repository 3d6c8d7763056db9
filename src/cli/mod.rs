//! CLI command handlers
//!
//! Each handler performs one load, zero-or-one mutation + save, and one
//! formatted print. Store errors propagate to `main`, which turns them into
//! a non-zero exit.

pub mod expense;
pub mod export;
pub mod plot;
pub mod report;

pub use expense::{handle_add, handle_delete, handle_edit, handle_list};
pub use export::{handle_export, ExportFormat};
pub use plot::{handle_plot, PlotKind};
pub use report::{
    handle_by_category, handle_extremes, handle_summary, handle_total, handle_trend,
};
