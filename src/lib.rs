//! # CLUES Summary Library
//!
//! Extracts selection-coefficient statistics from CLUES inference logs and
//! emits a JSON summary record per run.
//!
//! ## Modules
//! - `config`: CLI argument parsing and validation
//! - `data`: Epoch table and summary record
//! - `error`: Error types and result aliases
//! - `io`: Log scanning and JSON writing
//! - `model`: Likelihood-ratio to p-value transform
//! - `pipelines`: End-to-end orchestration

pub mod config;
pub mod data;
pub mod error;
pub mod io;
pub mod model;
pub mod pipelines;

// Re-export commonly used types
pub use config::Config;
pub use data::{EpochTable, Metadata, Mode, SummaryRecord};
pub use error::{Result, SummaryError};
pub use io::{extract_summary, scan_log, write_summary};
pub use model::wilks_pvalue;
pub use pipelines::SummaryPipeline;
