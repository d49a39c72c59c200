//! The long-format result table
//!
//! Fixed-shape structs rather than a generic dataframe: the schema is known
//! at design time. For a sample of size n and q requested quantiles the
//! table has 2n rows and 5 + q columns — the `me` block first, then the
//! `sd` block, each in original sample order.

use crate::aggregate::Aggregates;
use std::fmt;

/// Tracked statistic a table row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Bootstrap distribution of the sample mean (`"me"`)
    Mean,
    /// Bootstrap distribution of the sample standard deviation (`"sd"`)
    Std,
}

impl Track {
    /// Both tracks, in table order
    pub const ALL: [Track; 2] = [Track::Mean, Track::Std];

    /// Column label for this track
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Mean => "me",
            Track::Std => "sd",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the prediction-interval table
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Which statistic's block this row belongs to
    pub track: Track,
    /// The original observation
    pub value: f64,
    /// The observation's ecdf value from this track's aggregate
    pub ecdf: f64,
    /// Bootstrap estimate of the mean (same on every row)
    pub me: f64,
    /// Bootstrap estimate of the standard deviation (same on every row)
    pub sd: f64,
    /// One value per requested quantile, constant within a track block
    pub quantile_values: Vec<f64>,
}

/// Prediction-interval statistics in long format
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTable {
    column_names: Vec<String>,
    rows: Vec<TableRow>,
}

impl PredictionTable {
    /// Assemble the table from the aggregated tracks
    pub(crate) fn build(aggregates: &Aggregates, sample: &[f64], probabilities: &[f64]) -> Self {
        let me = aggregates.mean_track.estimate;
        let sd = aggregates.std_track.estimate;

        let mut column_names = vec![
            "track".to_string(),
            "value".to_string(),
            "ecdf".to_string(),
            "me".to_string(),
            "sd".to_string(),
        ];
        column_names.extend(probabilities.iter().map(|&p| Self::quantile_column_name(p)));

        let mut rows = Vec::with_capacity(2 * sample.len());
        for track in Track::ALL {
            let agg = match track {
                Track::Mean => &aggregates.mean_track,
                Track::Std => &aggregates.std_track,
            };
            for (i, &value) in sample.iter().enumerate() {
                rows.push(TableRow {
                    track,
                    value,
                    ecdf: agg.ecdf_at_sample[i],
                    me,
                    sd,
                    quantile_values: agg.quantile_values.clone(),
                });
            }
        }

        Self { column_names, rows }
    }

    /// Column name for a quantile probability: leading `0.` stripped and
    /// prefixed with `qu_` (0.025 → `qu_025`, 0.5 → `qu_5`)
    pub fn quantile_column_name(p: f64) -> String {
        let text = format!("{p}");
        let digits = text.strip_prefix("0.").unwrap_or(&text);
        format!("qu_{digits}")
    }

    /// Number of rows (2 × sample size)
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (5 + number of quantiles)
    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// Column names in table order
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// All rows, `me` block first
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// The rows of one track block, in original sample order
    pub fn track_rows(&self, track: Track) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(move |row| row.track == track)
    }
}

impl fmt::Display for PredictionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.column_names.join("\t"))?;
        for row in &self.rows {
            write!(
                f,
                "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
                row.track, row.value, row.ecdf, row.me, row.sd
            )?;
            for q in &row.quantile_values {
                write!(f, "\t{q:.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
