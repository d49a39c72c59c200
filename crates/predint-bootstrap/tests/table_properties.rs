//! Cross-stage properties of the prediction-interval table

use approx::assert_relative_eq;
use predint_bootstrap::{
    aggregate, prediction_interval_table, Error, PredictionIntervals, Resampler, Result,
    SeededResampler, StatContext, Track, VectorAggregation, DEFAULT_QUANTILES,
};
use rand::prelude::*;
use rand_distr::StandardNormal;

fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.sample(StandardNormal)).collect()
}

#[test]
fn table_shape_is_2n_by_5_plus_q() {
    let sample = normal_sample(25, 42);
    let table = PredictionIntervals::new()
        .with_replicates(1000)
        .with_seed(42)
        .compute(&sample)
        .unwrap();

    assert_eq!(table.n_rows(), 50);
    assert_eq!(table.n_columns(), 10);
    assert_eq!(
        table.column_names(),
        &["track", "value", "ecdf", "me", "sd", "qu_025", "qu_125", "qu_5", "qu_875", "qu_975"]
    );
}

#[test]
fn track_blocks_are_contiguous_me_then_sd() {
    let sample = normal_sample(10, 1);
    let table = PredictionIntervals::new()
        .with_replicates(100)
        .with_seed(1)
        .compute(&sample)
        .unwrap();

    let tracks: Vec<Track> = table.rows().iter().map(|r| r.track).collect();
    assert!(tracks[..10].iter().all(|&t| t == Track::Mean));
    assert!(tracks[10..].iter().all(|&t| t == Track::Std));
    assert_eq!(table.track_rows(Track::Mean).count(), 10);
    assert_eq!(table.track_rows(Track::Std).count(), 10);
}

#[test]
fn value_column_reproduces_sample_order_per_block() {
    let sample = vec![5.0, 1.0, 3.0, 2.0, 4.0];
    let table = PredictionIntervals::new()
        .with_replicates(50)
        .with_seed(9)
        .compute(&sample)
        .unwrap();

    for track in Track::ALL {
        let values: Vec<f64> = table.track_rows(track).map(|r| r.value).collect();
        assert_eq!(values, sample);
    }
}

#[test]
fn scalar_estimates_are_constant_across_the_table() {
    let sample = normal_sample(20, 5);
    let table = PredictionIntervals::new()
        .with_replicates(300)
        .with_seed(5)
        .compute(&sample)
        .unwrap();

    let first = &table.rows()[0];
    for row in table.rows() {
        assert_eq!(row.me, first.me);
        assert_eq!(row.sd, first.sd);
    }
}

#[test]
fn quantile_columns_are_constant_within_each_block() {
    let sample = normal_sample(15, 8);
    let table = PredictionIntervals::new()
        .with_replicates(200)
        .with_seed(8)
        .compute(&sample)
        .unwrap();

    for track in Track::ALL {
        let mut rows = table.track_rows(track);
        let first = rows.next().unwrap().quantile_values.clone();
        assert_eq!(first.len(), DEFAULT_QUANTILES.len());
        for row in rows {
            assert_eq!(row.quantile_values, first);
        }
    }
}

#[test]
fn estimates_track_the_sample_statistics() {
    // Mean 10, sd 2: the bootstrap estimates should land close by
    let sample: Vec<f64> = normal_sample(200, 13)
        .into_iter()
        .map(|x| 10.0 + 2.0 * x)
        .collect();

    let table = PredictionIntervals::new()
        .with_replicates(2000)
        .with_seed(13)
        .compute(&sample)
        .unwrap();

    let row = &table.rows()[0];
    assert_relative_eq!(row.me, 10.0, epsilon = 0.5);
    assert_relative_eq!(row.sd, 2.0, epsilon = 0.5);
}

#[test]
fn fixed_seed_runs_are_identical() {
    let sample = normal_sample(25, 21);
    let pipeline = PredictionIntervals::new().with_replicates(500).with_seed(21);

    let a = pipeline.compute(&sample).unwrap();
    let b = pipeline.compute(&sample).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_quantile_two_replicates_gives_six_columns() {
    let sample = normal_sample(25, 3);
    let table = PredictionIntervals::new()
        .with_replicates(2)
        .with_quantiles([0.5])
        .with_seed(3)
        .compute(&sample)
        .unwrap();

    assert_eq!(table.n_columns(), 6);
    assert_eq!(table.n_rows(), 50);
    assert_eq!(table.column_names()[5], "qu_5");
}

#[test]
fn one_replicate_is_rejected() {
    let sample = normal_sample(25, 4);
    let result = PredictionIntervals::new()
        .with_replicates(1)
        .with_seed(4)
        .compute(&sample);

    assert!(matches!(
        result,
        Err(Error::InsufficientReplicates {
            expected: 2,
            actual: 1
        })
    ));
}

#[test]
fn invalid_samples_are_rejected_eagerly() {
    assert!(prediction_interval_table(&[1.0]).is_err());
    assert!(prediction_interval_table(&[]).is_err());
    assert!(prediction_interval_table(&[1.0, f64::NAN, 3.0]).is_err());
}

#[test]
fn out_of_range_quantiles_are_rejected() {
    let sample = normal_sample(10, 6);
    for bad in [0.0, 1.0, -0.5, 1.5] {
        let result = PredictionIntervals::new()
            .with_quantiles([0.5, bad])
            .with_seed(6)
            .compute(&sample);
        assert!(result.is_err(), "quantile {bad} should be rejected");
    }
}

#[test]
fn duplicate_and_unsorted_quantiles_keep_their_order() {
    let sample = normal_sample(10, 7);
    let table = PredictionIntervals::new()
        .with_replicates(50)
        .with_quantiles([0.9, 0.1, 0.9])
        .with_seed(7)
        .compute(&sample)
        .unwrap();

    assert_eq!(table.column_names()[5..], ["qu_9", "qu_1", "qu_9"]);
    let row = &table.rows()[0];
    assert_eq!(row.quantile_values[0], row.quantile_values[2]);
    assert!(row.quantile_values[1] < row.quantile_values[0]);
}

#[test]
fn sd_standard_error_stabilizes_with_more_replicates() {
    // Law-of-large-numbers sanity check on the sd track's standard error:
    // the across-replicate spread of the replicate sds settles down as the
    // replicate count grows.
    let sample = normal_sample(25, 99);
    let probabilities = [0.5];
    let context = StatContext::new(&sample, &probabilities);

    let se_for = |replicates: usize| {
        let stats = SeededResampler::new()
            .with_seed(99)
            .run(&sample, |r| context.replicate_stat(r), replicates)
            .unwrap();
        aggregate(&stats, VectorAggregation::FirstReplicate)
            .unwrap()
            .std_track
            .std_error
    };

    let coarse = se_for(2000);
    let fine = se_for(20000);

    assert!(fine > 0.0);
    assert!(
        (coarse - fine).abs() / fine < 0.15,
        "se did not stabilize: {coarse} vs {fine}"
    );
}

/// Deterministic resampler: replicate i shifts every observation by +i.
/// Replicate 0 is the sample itself, which makes the replicate-0 vector
/// propagation directly observable.
struct ShiftResampler;

impl Resampler for ShiftResampler {
    fn run<T, F>(&self, sample: &[f64], statistic: F, replicates: usize) -> Result<Vec<T>>
    where
        F: Fn(&[f64]) -> Result<T> + Sync,
        T: Send,
    {
        (0..replicates)
            .map(|i| {
                let shifted: Vec<f64> = sample.iter().map(|&x| x + i as f64).collect();
                statistic(&shifted)
            })
            .collect()
    }
}

#[test]
fn first_replicate_vectors_are_propagated_verbatim() {
    let sample = vec![1.0, 2.0, 3.0, 4.0];
    let table = PredictionIntervals::new()
        .with_replicates(2)
        .with_quantiles([0.5])
        .compute_with(&ShiftResampler, &sample)
        .unwrap();

    // Replicate 0 is the sample itself: its ecdf at the sample points is
    // the rank fraction, and its median is 2.5. Both tracks carry them.
    for track in Track::ALL {
        let ecdf: Vec<f64> = table.track_rows(track).map(|r| r.ecdf).collect();
        assert_eq!(ecdf, vec![0.25, 0.5, 0.75, 1.0]);
        for row in table.track_rows(track) {
            assert_eq!(row.quantile_values, vec![2.5]);
        }
    }
}

#[test]
fn elementwise_vector_aggregation_reduces_across_replicates() {
    let sample = vec![1.0, 2.0, 3.0, 4.0];
    let table = PredictionIntervals::new()
        .with_replicates(2)
        .with_quantiles([0.5])
        .with_vector_aggregation(VectorAggregation::Elementwise)
        .compute_with(&ShiftResampler, &sample)
        .unwrap();

    // Replicate 0 ecdf at sample: [0.25, 0.5, 0.75, 1.0]
    // Replicate 1 ([2,3,4,5]) ecdf at sample: [0.0, 0.25, 0.5, 0.75]
    let me_ecdf: Vec<f64> = table.track_rows(Track::Mean).map(|r| r.ecdf).collect();
    assert_eq!(me_ecdf, vec![0.125, 0.375, 0.625, 0.875]);

    // sd track: ddof=1 spread of each pair, |a − b| / sqrt(2)
    let expected = 0.25 / 2.0f64.sqrt();
    for row in table.track_rows(Track::Std) {
        assert_relative_eq!(row.ecdf, expected, epsilon = 1e-12);
    }

    // Medians 2.5 and 3.5: mean 3.0, spread 1/sqrt(2)
    let me_row = table.track_rows(Track::Mean).next().unwrap();
    assert_relative_eq!(me_row.quantile_values[0], 3.0, epsilon = 1e-12);
    let sd_row = table.track_rows(Track::Std).next().unwrap();
    assert_relative_eq!(
        sd_row.quantile_values[0],
        1.0 / 2.0f64.sqrt(),
        epsilon = 1e-12
    );
}
