//! # Summary Pipeline
//!
//! ## Role
//! Turn one CLUES log into one JSON summary.
//!
//! ## Steps
//! 1. **Open log:** buffered reader over `--log`
//! 2. **Extract:** scan for `logLR` and the epoch table, compute the p-value
//! 3. **Write:** pretty JSON to `--out` (or stdout for `-`)
//!
//! The output file is created only after extraction succeeds, so a log
//! without a `logLR` line never leaves an empty or partial document behind.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use tracing::{info, instrument};

use crate::config::{Config, OutputTarget};
use crate::data::SummaryRecord;
use crate::error::Result;
use crate::io::{extract_summary, write_summary};

pub struct SummaryPipeline {
    config: Config,
}

impl SummaryPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run extraction and write the document, returning the record written
    #[instrument(skip(self), fields(rsid = %self.config.rsid))]
    pub fn run(&self) -> Result<SummaryRecord> {
        let record = self.extract()?;

        match self.config.output_target() {
            OutputTarget::Stdout => {
                let stdout = io::stdout();
                write_summary(stdout.lock(), &record)?;
            }
            OutputTarget::File(path) => {
                let file = File::create(&path)?;
                write_summary(BufWriter::new(file), &record)?;
                info!(out = %path.display(), "summary written");
            }
        }

        Ok(record)
    }

    /// Read and summarise the log without writing anything
    pub fn extract(&self) -> Result<SummaryRecord> {
        info!(log = %self.config.log.display(), "reading log");
        let file = File::open(&self.config.log)?;
        let record = extract_summary(BufReader::new(file), self.config.metadata())?;
        info!(
            log_lr = record.log_lr(),
            pval = record.pval(),
            n_epochs = record.epochs().len(),
            "log summarised"
        );
        Ok(record)
    }
}
