//! Descriptive statistics for numeric columns.
//!
//! # Definitions
//!
//! - `std` is the sample standard deviation (`n - 1` denominator).
//! - Skewness is `m3 / m2^1.5` and kurtosis is the excess `m4 / m2^2 - 3`,
//!   with central moments taken over `n`.
//! - Quartiles interpolate linearly between order statistics at position
//!   `(n - 1) * p`.
//! - A constant column has `std = 0`, `CV = 0`, and undefined shape metrics.

use insight_model::{AnalysisWarning, ColumnStats, WarningKind, percentage};

use crate::values::{missing_count, present};

/// Stats for one column plus its sorted values, which the outlier detector
/// reuses.
#[derive(Debug, Clone)]
pub struct DescribedColumn {
    pub stats: ColumnStats,
    pub sorted: Vec<f64>,
}

/// Compute every descriptive metric except outliers.
pub fn describe(name: &str, values: &[Option<f64>]) -> DescribedColumn {
    let row_count = values.len();
    let missing = missing_count(values);
    let observed = present(values);
    let mut sorted = observed.clone();
    sorted.sort_by(f64::total_cmp);

    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return DescribedColumn {
            stats: ColumnStats::undefined(name, missing, row_count),
            sorted,
        };
    };

    let n = observed.len();
    let mean = observed.iter().sum::<f64>() / n as f64;
    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let constant = min == max;

    let (std, skewness, kurtosis) = if n < 2 {
        (None, None, None)
    } else if constant {
        (Some(0.0), None, None)
    } else {
        let moments = CentralMoments::new(&observed, mean);
        let std = (moments.sum_sq / (n - 1) as f64).sqrt();
        (Some(std), moments.skewness(), moments.kurtosis())
    };

    let stats = ColumnStats {
        name: name.to_string(),
        count: n,
        missing,
        missing_percentage: percentage(missing, row_count),
        mean: Some(mean),
        median: quantile(&sorted, 0.5),
        std,
        min: Some(min),
        max: Some(max),
        range: Some(max - min),
        q1,
        q3,
        iqr: q1.zip(q3).map(|(q1, q3)| q3 - q1),
        skewness,
        kurtosis,
        coefficient_of_variation: std.and_then(|std| coefficient_of_variation(std, mean)),
        outliers: None,
    };
    DescribedColumn { stats, sorted }
}

/// `std / mean`; zero for zero spread, undefined for a zero mean.
pub fn coefficient_of_variation(std: f64, mean: f64) -> Option<f64> {
    if std == 0.0 {
        Some(0.0)
    } else if mean == 0.0 {
        None
    } else {
        Some(std / mean)
    }
}

/// Linear-interpolation quantile of ascending values.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = last as f64 * p.clamp(0.0, 1.0);
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(last);
    let fraction = position - lower as f64;
    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

/// Warnings implied by a column's stats.
pub fn stats_warnings(stats: &ColumnStats) -> Vec<AnalysisWarning> {
    let mut warnings = Vec::new();
    if stats.count < 2 {
        warnings.push(AnalysisWarning::for_column(
            WarningKind::InsufficientData,
            &stats.name,
            format!(
                "{} usable value(s); dispersion and shape metrics are undefined",
                stats.count
            ),
        ));
    } else if stats.std == Some(0.0) {
        warnings.push(AnalysisWarning::for_column(
            WarningKind::DegenerateDistribution,
            &stats.name,
            "zero variance; skewness and kurtosis are undefined",
        ));
    }
    if stats.count > 0 && stats.std.is_some() && stats.coefficient_of_variation.is_none() {
        warnings.push(AnalysisWarning::for_column(
            WarningKind::DegenerateDistribution,
            &stats.name,
            "zero mean; coefficient of variation is undefined",
        ));
    }
    warnings
}

struct CentralMoments {
    n: f64,
    sum_sq: f64,
    sum_cube: f64,
    sum_fourth: f64,
}

impl CentralMoments {
    fn new(values: &[f64], mean: f64) -> Self {
        let mut moments = Self {
            n: values.len() as f64,
            sum_sq: 0.0,
            sum_cube: 0.0,
            sum_fourth: 0.0,
        };
        for value in values {
            let d = value - mean;
            let d2 = d * d;
            moments.sum_sq += d2;
            moments.sum_cube += d2 * d;
            moments.sum_fourth += d2 * d2;
        }
        moments
    }

    fn m2(&self) -> f64 {
        self.sum_sq / self.n
    }

    fn skewness(&self) -> Option<f64> {
        let m2 = self.m2();
        (m2 > 0.0).then(|| (self.sum_cube / self.n) / m2.powf(1.5))
    }

    fn kurtosis(&self) -> Option<f64> {
        let m2 = self.m2();
        (m2 > 0.0).then(|| (self.sum_fourth / self.n) / (m2 * m2) - 3.0)
    }
}
