//! Empirical quantiles with linear interpolation between order statistics
//!
//! Uses the `h = (n−1)·p` rule: the quantile is read off the sorted sample
//! at fractional rank `h`, interpolating linearly between the two
//! surrounding order statistics. This is the same convention as numpy's
//! `"linear"` method, so results line up with tooling that uses it.

use crate::error::{Error, Result};

/// The `p`-th empirical quantile of a non-empty sample
///
/// `p` must be strictly between 0 and 1.
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    Error::check_probability(p)?;
    if data.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(quantile_sorted(&sorted, p))
}

/// Batch form: one quantile per probability, in the given order
///
/// Sorts the data once; duplicates and unsorted probabilities are preserved.
pub fn quantiles(data: &[f64], probabilities: &[f64]) -> Result<Vec<f64>> {
    Error::check_probabilities(probabilities)?;
    if data.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(probabilities
        .iter()
        .map(|&p| quantile_sorted(&sorted, p))
        .collect())
}

fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
