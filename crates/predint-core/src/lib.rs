//! Statistical primitives for the predint workspace
//!
//! This crate provides the building blocks the bootstrap pipeline is made of:
//!
//! - **Scalar statistics**: arithmetic mean and sample standard deviation
//!   (n−1 denominator) that fail on undersized input instead of returning NaN
//! - **Empirical CDF**: right-continuous step function of a sample,
//!   evaluable at arbitrary points
//! - **Empirical quantiles**: linear interpolation between order statistics
//! - **Error types**: a unified error enum with validation helpers
//!
//! Everything here is pure and operates on `&[f64]` slices.

mod ecdf;
mod error;
mod quantile;
mod stats;

pub use ecdf::Ecdf;
pub use error::{Error, Result};
pub use quantile::{quantile, quantiles};
pub use stats::{mean, sample_std};
