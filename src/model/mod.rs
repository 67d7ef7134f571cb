//! # Model Module
//!
//! Statistical transforms applied to values extracted from the log.

pub mod wilks;

pub use wilks::{chi2_sf, lr_statistic, wilks_pvalue, WILKS_DOF};
