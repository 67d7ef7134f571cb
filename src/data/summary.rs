//! # Summary Record
//!
//! The output entity: caller metadata plus the statistics pulled from the log.

use serde::Serialize;

use super::epochs::EpochTable;

/// Inference mode tag written to every record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Ancient,
}

/// Caller-supplied strings, copied verbatim into the record
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    pub rsid: String,
    pub ancestry: String,
    pub use_freq: String,
    pub mod_freq: String,
}

/// One summary document
///
/// Field order here is the key order of the emitted JSON.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRecord {
    rsid: String,
    mode: Mode,
    ancestry: String,
    use_freq: String,
    mod_freq: String,
    #[serde(rename = "logLR")]
    log_lr: f64,
    pval: f64,
    epochs: EpochTable,
}

impl SummaryRecord {
    pub fn new(metadata: Metadata, log_lr: f64, pval: f64, epochs: EpochTable) -> Self {
        let Metadata {
            rsid,
            ancestry,
            use_freq,
            mod_freq,
        } = metadata;
        Self {
            rsid,
            mode: Mode::Ancient,
            ancestry,
            use_freq,
            mod_freq,
            log_lr,
            pval,
            epochs,
        }
    }

    pub fn rsid(&self) -> &str {
        &self.rsid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn ancestry(&self) -> &str {
        &self.ancestry
    }

    pub fn use_freq(&self) -> &str {
        &self.use_freq
    }

    pub fn mod_freq(&self) -> &str {
        &self.mod_freq
    }

    /// Log-likelihood ratio of the selection model against neutrality
    pub fn log_lr(&self) -> f64 {
        self.log_lr
    }

    pub fn pval(&self) -> f64 {
        self.pval
    }

    pub fn epochs(&self) -> &EpochTable {
        &self.epochs
    }
}
