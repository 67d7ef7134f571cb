//! # Pipeline Module
//!
//! High-level orchestration: open the log, extract the summary, write it out.

pub mod summary;

pub use summary::SummaryPipeline;
