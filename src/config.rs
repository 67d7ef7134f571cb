//! # Configuration Logic
//!
//! ## Role
//! CLI argument parsing and validation.
//!
//! ## Validation
//! - Ensure the `--log` file exists and is a regular file
//! - Metadata strings (`--rsid`, `--ancestry`, `--use-freq`, `--mod-freq`)
//!   are passed through untouched
//!
//! ## Example CLI
//! ```bash
//! clues-summary --rsid rs4988235 --ancestry ALL --use-freq True \
//!     --mod-freq 0.71 --log rs4988235.log --out rs4988235.json
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::data::Metadata;
use crate::error::{Result, SummaryError};

/// Output path that selects standard output instead of a file
pub const STDOUT_PATH: &str = "-";

/// Command-line configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "clues-summary")]
#[command(version, about = "Parse a CLUES log file into a JSON selection summary", long_about = None)]
pub struct Config {
    /// RefSeq ID
    #[arg(long, value_name = "STRING")]
    pub rsid: String,

    /// Ancestral path
    #[arg(long, value_name = "STRING")]
    pub ancestry: String,

    /// Was the modern frequency used
    #[arg(long, value_name = "STRING")]
    pub use_freq: String,

    /// The modern population frequency
    #[arg(long, value_name = "STRING")]
    pub mod_freq: String,

    /// CLUES log file
    #[arg(long = "log", value_name = "FILE")]
    pub log: PathBuf,

    /// Output filename (`-` for standard output)
    #[arg(long = "out", value_name = "FILE")]
    pub out: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the summary document is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl Config {
    /// Parse process arguments and validate them
    pub fn parse_and_validate() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check that the input log can be opened
    pub fn validate(&self) -> Result<()> {
        if self.log.as_os_str().is_empty() {
            return Err(SummaryError::config("--log must not be empty"));
        }
        if !self.log.is_file() {
            return Err(SummaryError::FileNotFound {
                path: self.log.clone(),
            });
        }
        if self.out.as_os_str().is_empty() {
            return Err(SummaryError::config("--out must not be empty"));
        }
        Ok(())
    }

    /// Resolve `--out` into a concrete sink
    pub fn output_target(&self) -> OutputTarget {
        if self.out == Path::new(STDOUT_PATH) {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(self.out.clone())
        }
    }

    /// Caller-supplied fields copied verbatim into the summary
    pub fn metadata(&self) -> Metadata {
        Metadata {
            rsid: self.rsid.clone(),
            ancestry: self.ancestry.clone(),
            use_freq: self.use_freq.clone(),
            mod_freq: self.mod_freq.clone(),
        }
    }
}
