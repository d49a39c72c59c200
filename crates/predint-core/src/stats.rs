//! Scalar statistics over `&[f64]` slices

use crate::error::{Error, Result};

/// Arithmetic mean of a slice
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation with n−1 denominator
///
/// Fails with [`Error::DegenerateInput`] when the input has fewer than two
/// distinct values: a single-point or all-equal sample carries no spread
/// information, and a silent 0 would poison any aggregate built on top.
pub fn sample_std(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::DegenerateInput(format!(
            "standard deviation undefined for {} observation(s)",
            data.len()
        )));
    }
    let first = data[0];
    if data.iter().all(|&x| x == first) {
        return Err(Error::DegenerateInput(
            "all observations are identical".to_string(),
        ));
    }

    let m = data.iter().sum::<f64>() / data.len() as f64;
    let variance = data.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64;
    Ok(variance.sqrt())
}
