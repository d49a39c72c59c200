//! High-level pipeline entry points
//!
//! [`PredictionIntervals`] configures and runs the whole pipeline; the
//! [`prediction_interval_table`] free function covers the common
//! all-defaults call. All input validation happens here, before any
//! resampling work starts, so a run either returns a fully populated table
//! or a typed error — never a partial table.

use crate::aggregate::{aggregate, VectorAggregation};
use crate::error::Result;
use crate::extract::StatContext;
use crate::resampler::{Resampler, SeededResampler};
use crate::table::PredictionTable;
use predint_core::Error as CoreError;
use tracing::{debug, instrument};

/// Default number of bootstrap replicates
pub const DEFAULT_REPLICATES: usize = 1000;

/// Default quantile probabilities (interval boundaries)
pub const DEFAULT_QUANTILES: [f64; 5] = [0.025, 0.125, 0.5, 0.875, 0.975];

/// Configurable bootstrap prediction-interval pipeline
///
/// # Example
///
/// ```rust
/// use predint_bootstrap::PredictionIntervals;
///
/// let sample = vec![2.1, 3.4, 1.9, 4.2, 2.8, 3.1, 2.2, 3.9];
/// let table = PredictionIntervals::new()
///     .with_replicates(200)
///     .with_seed(11)
///     .compute(&sample)
///     .unwrap();
///
/// assert_eq!(table.n_rows(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct PredictionIntervals {
    replicates: usize,
    probabilities: Vec<f64>,
    seed: Option<u64>,
    vectors: VectorAggregation,
}

impl Default for PredictionIntervals {
    fn default() -> Self {
        Self {
            replicates: DEFAULT_REPLICATES,
            probabilities: DEFAULT_QUANTILES.to_vec(),
            seed: None,
            vectors: VectorAggregation::default(),
        }
    }
}

impl PredictionIntervals {
    /// Create a pipeline with default replicates and quantiles
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bootstrap replicates (at least 2)
    pub fn with_replicates(mut self, replicates: usize) -> Self {
        self.replicates = replicates;
        self
    }

    /// Set the quantile probabilities
    ///
    /// Order is preserved in the output columns; duplicates and unsorted
    /// entries are accepted.
    pub fn with_quantiles(mut self, probabilities: impl Into<Vec<f64>>) -> Self {
        self.probabilities = probabilities.into();
        self
    }

    /// Set the base seed for reproducible resampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose how the per-observation ecdf/quantile vectors are aggregated
    pub fn with_vector_aggregation(mut self, vectors: VectorAggregation) -> Self {
        self.vectors = vectors;
        self
    }

    /// Run the pipeline with the default seeded resampler
    #[instrument(skip(self, sample), fields(n = sample.len(), replicates = self.replicates))]
    pub fn compute(&self, sample: &[f64]) -> Result<PredictionTable> {
        let mut resampler = SeededResampler::new();
        if let Some(seed) = self.seed {
            resampler = resampler.with_seed(seed);
        }
        self.compute_with(&resampler, sample)
    }

    /// Run the pipeline with a custom [`Resampler`]
    pub fn compute_with<R: Resampler>(
        &self,
        resampler: &R,
        sample: &[f64],
    ) -> Result<PredictionTable> {
        CoreError::check_sample(sample)?;
        CoreError::check_probabilities(&self.probabilities)?;
        crate::Error::check_replicates(self.replicates)?;

        let context = StatContext::new(sample, &self.probabilities);
        let stats = resampler.run(
            sample,
            |replicate| context.replicate_stat(replicate),
            self.replicates,
        )?;

        let aggregates = aggregate(&stats, self.vectors)?;
        debug!(
            rows = 2 * sample.len(),
            columns = 5 + self.probabilities.len(),
            "assembling prediction-interval table"
        );

        Ok(PredictionTable::build(
            &aggregates,
            sample,
            &self.probabilities,
        ))
    }
}

/// Compute the prediction-interval table with all defaults
///
/// Equivalent to `PredictionIntervals::new().compute(sample)`: 1000
/// replicates, quantiles `[0.025, 0.125, 0.5, 0.875, 0.975]`, unseeded.
pub fn prediction_interval_table(sample: &[f64]) -> Result<PredictionTable> {
    PredictionIntervals::new().compute(sample)
}
