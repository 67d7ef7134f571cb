//! # I/O Module
//!
//! File reading/writing boundaries. Converts between the CLUES text log, the
//! in-memory `SummaryRecord`, and the JSON summary on disk.

pub mod clues_log;
pub mod json;

pub use clues_log::{extract_summary, scan_log, LogScan, RatioToken};
pub use json::write_summary;
