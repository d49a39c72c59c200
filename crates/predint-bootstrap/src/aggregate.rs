//! Cross-replicate aggregation
//!
//! Collects the per-replicate statistics into two [`AggregatedStat`]
//! records, one per track: `me` (built from the replicate means) and `sd`
//! (built from the replicate standard deviations). The across-replicate
//! mean of a raw statistic is its bootstrap point estimate; the
//! across-replicate standard deviation (n−1) is its bootstrap standard
//! error.

use crate::error::{Error, Result};
use crate::extract::ReplicateStat;
use tracing::debug;

/// How the per-observation ecdf and quantile vectors are carried forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VectorAggregation {
    /// Propagate replicate 0's vectors unchanged (default)
    ///
    /// This reproduces the reference output this pipeline is compatible
    /// with: the vectors attached to both tracks come from the first
    /// replicate only and are not recomputed across replicates.
    #[default]
    FirstReplicate,
    /// Reduce the vectors elementwise across replicates
    ///
    /// The mean track carries the elementwise across-replicate mean, the
    /// sd track the elementwise across-replicate standard deviation (n−1).
    Elementwise,
}

/// Bootstrap aggregate for one tracked statistic
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedStat {
    /// Across-replicate mean of the raw statistic (bootstrap point estimate)
    pub estimate: f64,
    /// Across-replicate standard deviation, n−1 (bootstrap standard error)
    pub std_error: f64,
    /// Per-observation ecdf values, per [`VectorAggregation`]
    pub ecdf_at_sample: Vec<f64>,
    /// Per-probability quantile values, per [`VectorAggregation`]
    pub quantile_values: Vec<f64>,
}

/// The two aggregated tracks of a bootstrap run
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    /// Track `me`: aggregates of the replicate means
    pub mean_track: AggregatedStat,
    /// Track `sd`: aggregates of the replicate standard deviations
    pub std_track: AggregatedStat,
}

/// Aggregate scored replicates into the two tracks
///
/// Requires at least two replicates; with fewer, the across-replicate
/// standard deviation is undefined.
pub fn aggregate(stats: &[ReplicateStat], vectors: VectorAggregation) -> Result<Aggregates> {
    Error::check_replicates(stats.len())?;

    let means: Vec<f64> = stats.iter().map(|s| s.mean).collect();
    let stds: Vec<f64> = stats.iter().map(|s| s.std).collect();

    let (mean_estimate, mean_se) = mean_and_spread(&means);
    let (std_estimate, std_se) = mean_and_spread(&stds);

    debug!(
        replicates = stats.len(),
        mean_estimate, mean_se, std_estimate, std_se, "aggregated bootstrap replicates"
    );

    let (mean_ecdf, std_ecdf, mean_quantiles, std_quantiles) = match vectors {
        VectorAggregation::FirstReplicate => {
            let first = &stats[0];
            (
                first.ecdf_at_sample.clone(),
                first.ecdf_at_sample.clone(),
                first.quantile_values.clone(),
                first.quantile_values.clone(),
            )
        }
        VectorAggregation::Elementwise => {
            let (ecdf_mean, ecdf_std) = elementwise(stats, |s| &s.ecdf_at_sample);
            let (qu_mean, qu_std) = elementwise(stats, |s| &s.quantile_values);
            (ecdf_mean, ecdf_std, qu_mean, qu_std)
        }
    };

    Ok(Aggregates {
        mean_track: AggregatedStat {
            estimate: mean_estimate,
            std_error: mean_se,
            ecdf_at_sample: mean_ecdf,
            quantile_values: mean_quantiles,
        },
        std_track: AggregatedStat {
            estimate: std_estimate,
            std_error: std_se,
            ecdf_at_sample: std_ecdf,
            quantile_values: std_quantiles,
        },
    })
}

/// Across-replicate mean and n−1 standard deviation
///
/// Unlike the per-replicate statistic, identical values are legitimate
/// here: replicates that happen to agree give a standard error of zero.
fn mean_and_spread(values: &[f64]) -> (f64, f64) {
    let m = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    (m, variance.sqrt())
}

fn elementwise<'a, F>(stats: &'a [ReplicateStat], field: F) -> (Vec<f64>, Vec<f64>)
where
    F: Fn(&'a ReplicateStat) -> &'a Vec<f64>,
{
    let len = field(&stats[0]).len();
    let mut means = Vec::with_capacity(len);
    let mut spreads = Vec::with_capacity(len);
    for i in 0..len {
        let column: Vec<f64> = stats.iter().map(|s| field(s)[i]).collect();
        let (m, s) = mean_and_spread(&column);
        means.push(m);
        spreads.push(s);
    }
    (means, spreads)
}
