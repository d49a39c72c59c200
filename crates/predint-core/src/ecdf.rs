//! Right-continuous empirical CDF step function
//!
//! `Ecdf` owns a sorted copy of its source sample and answers, for any point
//! `t`, the fraction of observations ≤ `t`. Evaluation is a binary search,
//! so building once and querying many points is cheap.

use crate::error::{Error, Result};

/// Empirical CDF of a sample
#[derive(Debug, Clone)]
pub struct Ecdf {
    sorted: Vec<f64>,
}

impl Ecdf {
    /// Build the ECDF of a non-empty sample
    pub fn new(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Ok(Self { sorted })
    }

    /// Number of observations behind the step function
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false: construction rejects empty samples
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Fraction of observations ≤ `t` (right-continuous)
    pub fn value_at(&self, t: f64) -> f64 {
        let below_or_equal = self.sorted.partition_point(|&x| x <= t);
        below_or_equal as f64 / self.sorted.len() as f64
    }

    /// Evaluate at every point of `queries`, preserving query order
    pub fn values_at(&self, queries: &[f64]) -> Vec<f64> {
        queries.iter().map(|&t| self.value_at(t)).collect()
    }
}
