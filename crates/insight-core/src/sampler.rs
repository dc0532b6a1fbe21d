//! Deterministic row sampling for chart inputs.
//!
//! Sampling only shapes what is handed to chart rendering. Statistics are
//! always computed over the full dataset.

use polars::prelude::{DataFrame, IdxCa, IdxSize, PolarsResult};
use serde::Serialize;
use sha2::{Digest, Sha256};

use insight_model::SamplingConfig;

/// Rows selected for visualization.
///
/// Serializes without the frame; `row_indices` identify the rows.
#[derive(Debug, Clone, Serialize)]
pub struct VisualizationSample {
    /// False when the dataset fit under the threshold and was passed through.
    pub sampled: bool,
    pub source_rows: usize,
    /// Selected row indices, ascending.
    pub row_indices: Vec<usize>,
    #[serde(skip)]
    pub frame: DataFrame,
}

impl VisualizationSample {
    pub fn len(&self) -> usize {
        self.row_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_indices.is_empty()
    }
}

/// Rank of a row under a seed: the first eight bytes of
/// `sha256(seed_le || row_le)` read as little-endian.
pub fn row_rank(seed: u64, row: usize) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update((row as u64).to_le_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(prefix)
}

/// Row indices to keep, in ascending order.
///
/// Returns every index when `row_count` is at or below the threshold.
pub fn sample_indices(row_count: usize, config: &SamplingConfig) -> Vec<usize> {
    if row_count <= config.row_threshold || config.sample_size >= row_count {
        return (0..row_count).collect();
    }
    if config.sample_size == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(u64, usize)> = (0..row_count)
        .map(|row| (row_rank(config.seed, row), row))
        .collect();
    ranked.select_nth_unstable(config.sample_size - 1);
    let mut indices: Vec<usize> = ranked[..config.sample_size]
        .iter()
        .map(|(_, row)| *row)
        .collect();
    indices.sort_unstable();
    indices
}

pub fn sample_frame(
    frame: &DataFrame,
    config: &SamplingConfig,
) -> PolarsResult<VisualizationSample> {
    let source_rows = frame.height();
    let row_indices = sample_indices(source_rows, config);
    if row_indices.len() == source_rows {
        return Ok(VisualizationSample {
            sampled: false,
            source_rows,
            row_indices,
            frame: frame.clone(),
        });
    }
    let idx: Vec<IdxSize> = row_indices.iter().map(|row| *row as IdxSize).collect();
    let sampled = frame.take(&IdxCa::from_vec("sample".into(), idx))?;
    Ok(VisualizationSample {
        sampled: true,
        source_rows,
        row_indices,
        frame: sampled,
    })
}

#[cfg(test)]
mod tests {
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    use super::*;

    fn config(row_threshold: usize, sample_size: usize, seed: u64) -> SamplingConfig {
        SamplingConfig {
            row_threshold,
            sample_size,
            seed,
        }
    }

    #[test]
    fn small_datasets_pass_through() {
        assert_eq!(sample_indices(5, &config(10, 3, 42)), vec![0, 1, 2, 3, 4]);
        assert_eq!(sample_indices(10, &config(10, 3, 42)).len(), 10);
    }

    #[test]
    fn large_datasets_are_cut_to_sample_size() {
        let indices = sample_indices(1_000, &config(100, 50, 42));
        assert_eq!(indices.len(), 50);
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(indices.iter().all(|row| *row < 1_000));
    }

    #[test]
    fn same_seed_same_rows() {
        let first = sample_indices(500, &config(100, 20, 7));
        let second = sample_indices(500, &config(100, 20, 7));
        assert_eq!(first, second);
        let other = sample_indices(500, &config(100, 20, 8));
        assert_ne!(first, other);
    }

    #[test]
    fn frame_rows_follow_indices() {
        let values: Vec<i64> = (0..200).collect();
        let frame = DataFrame::new(vec![Series::new("row".into(), values).into_column()])
            .expect("frame");
        let sample = sample_frame(&frame, &config(100, 10, 42)).expect("sample");

        assert!(sample.sampled);
        assert_eq!(sample.source_rows, 200);
        assert_eq!(sample.frame.height(), 10);
        let rows: Vec<i64> = sample
            .frame
            .column("row")
            .expect("column")
            .as_materialized_series()
            .i64()
            .expect("i64")
            .into_no_null_iter()
            .collect();
        let expected: Vec<i64> = sample.row_indices.iter().map(|row| *row as i64).collect();
        assert_eq!(rows, expected);
    }
}
