//! # clues-summary
//!
//! Parse a CLUES log file into a JSON selection summary.
//!
//! ## Usage
//! ```bash
//! clues-summary --rsid rs4988235 --ancestry ALL --use-freq True \
//!     --mod-freq 0.71 --log rs4988235.log --out rs4988235.json
//!
//! # Write to stdout with debug logging on stderr
//! clues-summary --rsid rs4988235 --ancestry ALL --use-freq True \
//!     --mod-freq 0.71 --log rs4988235.log --out - --verbose
//! ```

use std::time::Instant;

use clues_summary::config::Config;
use clues_summary::pipelines::SummaryPipeline;
use clues_summary::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the stderr log subscriber; `RUST_LOG` takes precedence
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let start = Instant::now();

    // Parse and validate configuration
    let config = Config::parse_and_validate()?;
    init_logging(config.verbose);

    info!(version = env!("CARGO_PKG_VERSION"), "clues-summary");

    let pipeline = SummaryPipeline::new(config);
    pipeline.run()?;

    info!(elapsed_s = start.elapsed().as_secs_f64(), "completed");

    Ok(())
}
