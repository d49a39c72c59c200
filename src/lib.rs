//! Bootstrap statistics for building prediction intervals from a single sample
//!
//! This facade crate re-exports the `predint` workspace members:
//!
//! - `predint-core`: errors, scalar statistics, empirical CDF, quantiles
//! - `predint-bootstrap`: the resampling pipeline and result table
//!
//! # Example
//!
//! ```rust
//! use predint::{PredictionIntervals, Track};
//!
//! let sample: Vec<f64> = (0..25).map(|i| i as f64 * 0.3 - 4.0).collect();
//!
//! let table = PredictionIntervals::new()
//!     .with_replicates(1000)
//!     .with_seed(42)
//!     .compute(&sample)
//!     .unwrap();
//!
//! assert_eq!(table.n_rows(), 50);
//! assert_eq!(table.n_columns(), 10);
//! assert_eq!(table.track_rows(Track::Mean).count(), 25);
//! ```

pub use predint_core::{mean, quantile, quantiles, sample_std, Ecdf, Error as CoreError};

pub use predint_bootstrap::{
    aggregate, prediction_interval_table, AggregatedStat, Aggregates, Error,
    PredictionIntervals, PredictionTable, ReplicateStat, Resampler, Result, SeededResampler,
    StatContext, TableRow, Track, VectorAggregation, DEFAULT_QUANTILES, DEFAULT_REPLICATES,
};
