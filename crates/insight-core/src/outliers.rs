//! IQR fence outlier detection.

use insight_model::{ColumnStats, OutlierSummary, percentage};

use crate::stats::DescribedColumn;

/// Count values outside `[Q1 - k*IQR, Q3 + k*IQR]`.
///
/// A zero IQR means the middle half of the column is constant; nothing is
/// flagged in that case.
pub fn detect_outliers(sorted: &[f64], q1: f64, q3: f64, multiplier: f64) -> OutlierSummary {
    let iqr = q3 - q1;
    let lower_bound = q1 - multiplier * iqr;
    let upper_bound = q3 + multiplier * iqr;
    let count = if iqr == 0.0 {
        0
    } else {
        sorted
            .iter()
            .filter(|value| **value < lower_bound || **value > upper_bound)
            .count()
    };
    OutlierSummary {
        lower_bound,
        upper_bound,
        count,
        percentage: percentage(count, sorted.len()),
    }
}

/// Fill in the outlier summary of a described column.
pub fn with_outliers(described: DescribedColumn, multiplier: f64) -> ColumnStats {
    let DescribedColumn { mut stats, sorted } = described;
    if let (Some(q1), Some(q3)) = (stats.q1, stats.q3) {
        stats.outliers = Some(detect_outliers(&sorted, q1, q3, multiplier));
    }
    stats
}
