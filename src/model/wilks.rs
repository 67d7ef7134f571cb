//! # Wilks' Theorem
//!
//! Converts a log-likelihood ratio into a p-value. Under the null model,
//! `2 * logLR` is asymptotically chi-squared with one degree of freedom
//! (one extra free parameter in the selection model).

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{Result, SummaryError};

/// Degrees of freedom for the selection-vs-neutral test
pub const WILKS_DOF: f64 = 1.0;

/// Likelihood-ratio test statistic for a log-likelihood ratio
#[inline]
pub fn lr_statistic(log_lr: f64) -> f64 {
    2.0 * log_lr
}

/// Chi-squared survival function `P(X > x)`
///
/// `x <= 0` gives 1.0 and `+inf` gives 0.0; NaN propagates.
pub fn chi2_sf(x: f64, dof: f64) -> Result<f64> {
    let dist = ChiSquared::new(dof).map_err(|e| {
        SummaryError::statistics(format!("invalid chi-squared dof {dof}: {e}"))
    })?;
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    if x <= 0.0 {
        return Ok(1.0);
    }
    if x == f64::INFINITY {
        return Ok(0.0);
    }
    Ok(dist.sf(x))
}

/// p-value for a log-likelihood ratio via Wilks' theorem
pub fn wilks_pvalue(log_lr: f64) -> Result<f64> {
    chi2_sf(lr_statistic(log_lr), WILKS_DOF)
}
