//! Configuration module for the expense tracker
//!
//! Provides XDG-compliant path resolution for the durable expense file.
//! The storage location is always injected from here; no module carries a
//! hard-coded data path.

pub mod paths;

pub use paths::TrackerPaths;
