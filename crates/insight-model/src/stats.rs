use serde::{Deserialize, Serialize};

/// IQR fences and the values falling outside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
    /// Share of non-missing values outside the fences, in percent.
    pub percentage: f64,
}

/// Descriptive statistics for one numeric column.
///
/// `None` marks a metric that is undefined for the column (too few values,
/// zero variance, zero mean). It serializes as `null`, never as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub name: String,
    /// Non-missing values used for every metric below.
    pub count: usize,
    pub missing: usize,
    pub missing_percentage: f64,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub range: Option<f64>,
    pub q1: Option<f64>,
    pub q3: Option<f64>,
    pub iqr: Option<f64>,
    pub skewness: Option<f64>,
    /// Excess kurtosis (normal distribution = 0).
    pub kurtosis: Option<f64>,
    /// `std / mean` as a ratio; `Some(0.0)` for constant columns.
    pub coefficient_of_variation: Option<f64>,
    pub outliers: Option<OutlierSummary>,
}

impl ColumnStats {
    /// Stats for a column with no usable values.
    pub fn undefined(name: impl Into<String>, missing: usize, row_count: usize) -> Self {
        Self {
            name: name.into(),
            count: 0,
            missing,
            missing_percentage: percentage(missing, row_count),
            mean: None,
            median: None,
            std: None,
            min: None,
            max: None,
            range: None,
            q1: None,
            q3: None,
            iqr: None,
            skewness: None,
            kurtosis: None,
            coefficient_of_variation: None,
            outliers: None,
        }
    }

    /// True when the column has at least one usable value.
    pub fn is_defined(&self) -> bool {
        self.count > 0
    }

    pub fn outlier_count(&self) -> Option<usize> {
        self.outliers.map(|summary| summary.count)
    }
}

/// `part / whole * 100`, or `0.0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
