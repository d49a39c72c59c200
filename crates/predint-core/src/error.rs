//! Error types for the statistical primitives

use thiserror::Error;

/// Errors from sample validation and scalar statistics
#[derive(Error, Debug)]
pub enum Error {
    /// Sample failed validation (too short, or non-finite values)
    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    /// Requested quantile probability outside (0, 1)
    #[error("Quantile probability {p} must be strictly between 0 and 1")]
    InvalidQuantile { p: f64 },

    /// Variance/standard deviation is undefined for the given data
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Fewer observations than the operation needs
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Validation helpers shared by the pipeline entry points

impl Error {
    /// Validate a sample: length ≥ 2 and all values finite
    pub fn check_sample(sample: &[f64]) -> Result<()> {
        if sample.len() < 2 {
            return Err(Error::InvalidSample(format!(
                "need at least 2 observations, got {}",
                sample.len()
            )));
        }
        if let Some(pos) = sample.iter().position(|x| !x.is_finite()) {
            return Err(Error::InvalidSample(format!(
                "non-finite value at index {pos}"
            )));
        }
        Ok(())
    }

    /// Validate a quantile probability: strictly inside (0, 1)
    pub fn check_probability(p: f64) -> Result<()> {
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(Error::InvalidQuantile { p });
        }
        Ok(())
    }

    /// Validate a whole quantile spec, preserving order
    pub fn check_probabilities(probabilities: &[f64]) -> Result<()> {
        for &p in probabilities {
            Self::check_probability(p)?;
        }
        Ok(())
    }
}
