//! Per-replicate statistic extraction
//!
//! [`StatContext`] carries the run-level inputs the statistic function needs
//! beyond the replicate itself: the original sample (evaluation points for
//! the replicate's ECDF) and the quantile probabilities. It is built once
//! per pipeline invocation and captured by the closure handed to the
//! resampler, which keeps the pipeline reentrant and safe for parallel
//! replicate scoring.

use crate::error::Result;
use predint_core::{mean, quantiles, sample_std, Ecdf};

/// Statistics computed from a single bootstrap replicate
#[derive(Debug, Clone, PartialEq)]
pub struct ReplicateStat {
    /// Arithmetic mean of the replicate
    pub mean: f64,
    /// Sample standard deviation of the replicate (n−1 denominator)
    pub std: f64,
    /// The replicate's ECDF evaluated at every original observation,
    /// in original-sample order
    pub ecdf_at_sample: Vec<f64>,
    /// The replicate's empirical quantiles, one per requested probability,
    /// in request order
    pub quantile_values: Vec<f64>,
}

/// Run-level context for scoring replicates
#[derive(Debug, Clone, Copy)]
pub struct StatContext<'a> {
    sample: &'a [f64],
    probabilities: &'a [f64],
}

impl<'a> StatContext<'a> {
    /// Bind the original sample and quantile probabilities for one run
    pub fn new(sample: &'a [f64], probabilities: &'a [f64]) -> Self {
        Self {
            sample,
            probabilities,
        }
    }

    /// Score one replicate
    ///
    /// Fails with a degenerate-input error when the replicate has fewer
    /// than two distinct values, since its standard deviation is then
    /// meaningless and would corrupt the sd-track aggregate downstream.
    pub fn replicate_stat(&self, replicate: &[f64]) -> Result<ReplicateStat> {
        let mean = mean(replicate)?;
        let std = sample_std(replicate)?;
        let ecdf_at_sample = Ecdf::new(replicate)?.values_at(self.sample);
        let quantile_values = quantiles(replicate, self.probabilities)?;

        Ok(ReplicateStat {
            mean,
            std,
            ecdf_at_sample,
            quantile_values,
        })
    }
}
