//! Bootstrap resampling pipeline for prediction-interval statistics
//!
//! Given a one-dimensional sample, this crate estimates the sampling
//! distribution of its mean and standard deviation by resampling with
//! replacement, and packages the results into a long-format table with one
//! row per observation per tracked statistic:
//!
//! 1. **Replicate generation** ([`Resampler`] / [`SeededResampler`]): draw
//!    replicates with replacement and score each with a statistic function
//! 2. **Statistic extraction** ([`StatContext`]): per replicate, compute
//!    mean, standard deviation, the replicate's ECDF evaluated at the
//!    original sample, and the replicate's empirical quantiles
//! 3. **Aggregation** ([`aggregate`]): across-replicate point estimates and
//!    standard errors for both tracks
//! 4. **Table shaping** ([`PredictionTable`]): the final 2n × (5+q) table
//!
//! # Example
//!
//! ```rust
//! use predint_bootstrap::PredictionIntervals;
//!
//! let sample: Vec<f64> = (0..25).map(|i| (i as f64).sin() * 2.0).collect();
//!
//! let table = PredictionIntervals::new()
//!     .with_replicates(500)
//!     .with_quantiles([0.025, 0.975])
//!     .with_seed(7)
//!     .compute(&sample)
//!     .unwrap();
//!
//! assert_eq!(table.n_rows(), 50);
//! assert_eq!(table.n_columns(), 7);
//! ```

mod aggregate;
mod api;
mod error;
mod extract;
mod resampler;
mod table;

pub use aggregate::{aggregate, AggregatedStat, Aggregates, VectorAggregation};
pub use api::{
    prediction_interval_table, PredictionIntervals, DEFAULT_QUANTILES, DEFAULT_REPLICATES,
};
pub use error::{Error, Result};
pub use extract::{ReplicateStat, StatContext};
pub use resampler::{Resampler, SeededResampler};
pub use table::{PredictionTable, TableRow, Track};
