//! Replicate generation seam
//!
//! The pipeline consumes replicate generation through the [`Resampler`]
//! trait: given a sample and a statistic function, produce an ordered
//! sequence of per-replicate results. [`SeededResampler`] is the default
//! implementation, drawing each replicate with replacement at the original
//! size.
//!
//! Replicate order is part of the contract: downstream aggregation indexes
//! replicate 0, so implementations must return results in generation order
//! even when scoring runs in parallel.

use crate::error::Result;
use rand::prelude::*;
use tracing::debug;

/// Source of scored bootstrap replicates
pub trait Resampler {
    /// Draw `replicates` resamples of `sample` and score each with
    /// `statistic`, preserving generation order
    ///
    /// A statistic failure on any replicate aborts the whole run; partial
    /// results are never returned.
    fn run<T, F>(&self, sample: &[f64], statistic: F, replicates: usize) -> Result<Vec<T>>
    where
        F: Fn(&[f64]) -> Result<T> + Sync,
        T: Send;
}

/// Default resampler: with-replacement draws from a per-replicate RNG
///
/// Each replicate gets its own `StdRng` derived from a base seed via
/// `seed_from_u64(base.wrapping_add(i))`, so a fixed seed yields identical
/// replicate streams regardless of scoring order or thread count. Without
/// an explicit seed the base is drawn from `thread_rng` once per run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededResampler {
    seed: Option<u64>,
}

impl SeededResampler {
    /// Create an unseeded resampler
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn draw(sample: &[f64], base_seed: u64, replicate: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(replicate as u64));
        let n = sample.len();
        (0..n).map(|_| sample[rng.gen_range(0..n)]).collect()
    }
}

impl Resampler for SeededResampler {
    fn run<T, F>(&self, sample: &[f64], statistic: F, replicates: usize) -> Result<Vec<T>>
    where
        F: Fn(&[f64]) -> Result<T> + Sync,
        T: Send,
    {
        let base_seed = self.seed.unwrap_or_else(|| thread_rng().gen());

        debug!(
            replicates,
            n = sample.len(),
            seeded = self.seed.is_some(),
            "generating bootstrap replicates"
        );

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..replicates)
                .into_par_iter()
                .map(|i| statistic(&Self::draw(sample, base_seed, i)))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..replicates)
                .map(|i| statistic(&Self::draw(sample, base_seed, i)))
                .collect()
        }
    }
}
