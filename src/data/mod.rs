//! # Data Module
//!
//! In-memory representations of one CLUES run's results.
//!
//! Everything here is transient: built during a single invocation, written
//! out, and dropped.

pub mod epochs;
pub mod summary;

// Re-export commonly used types
pub use epochs::EpochTable;
pub use summary::{Metadata, Mode, SummaryRecord};
