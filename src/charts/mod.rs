//! Chart rendering
//!
//! Pure consumers of aggregation output: each renderer takes a key → amount
//! mapping and produces an SVG document. No aggregation logic lives here.

pub mod svg;

pub use svg::{bar_chart, line_chart, pie_chart};
