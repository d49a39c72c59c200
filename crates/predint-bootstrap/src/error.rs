//! Error types for the bootstrap pipeline

use thiserror::Error;

/// Errors that can occur while building a prediction-interval table
#[derive(Error, Debug)]
pub enum Error {
    /// Too few replicates for across-replicate standard deviations
    #[error("Bootstrap requires at least {expected} replicates, got {actual}")]
    InsufficientReplicates { expected: usize, actual: usize },

    /// Error from the statistical primitives
    #[error("Statistics error: {0}")]
    Core(#[from] predint_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that a replicate count supports standard-error estimation
    pub fn check_replicates(replicates: usize) -> Result<()> {
        if replicates < 2 {
            return Err(Error::InsufficientReplicates {
                expected: 2,
                actual: replicates,
            });
        }
        Ok(())
    }
}
