//! # JSON Summary Writer
//!
//! Pretty-printed, two-space indented, keys in record order. No trailing
//! newline is written after the closing brace.
//!
//! Non-finite floats (e.g. a NaN ratio) are written as `null`.

use std::io::Write;

use crate::data::SummaryRecord;
use crate::error::Result;

/// Serialize a record to `writer` and flush it
pub fn write_summary<W: Write>(mut writer: W, record: &SummaryRecord) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;
    Ok(())
}
