//! Threshold configuration for the analysis engine.
//!
//! Every constant the engine uses to classify, rank, or phrase a result lives
//! here. The table is versioned so a bundle can record which thresholds
//! produced it, and the whole structure deserializes with per-group defaults
//! so callers can override a single value from JSON.

use serde::{Deserialize, Serialize};

use crate::correlation::CorrelationStrength;
use crate::error::{ConfigError, Result};
use crate::profile::CardinalityClass;

/// Version of the default threshold table.
pub const THRESHOLDS_VERSION: u32 = 1;

/// Complete, immutable configuration handed to the engine entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Threshold table version reported in every bundle.
    pub version: u32,
    pub outliers: OutlierConfig,
    pub categorical: CategoricalConfig,
    pub correlation: CorrelationConfig,
    pub quality: QualityConfig,
    pub insights: InsightThresholds,
    pub analysis_type: AnalysisTypeRules,
    pub sampling: SamplingConfig,
    pub charts: ChartConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            version: THRESHOLDS_VERSION,
            outliers: OutlierConfig::default(),
            categorical: CategoricalConfig::default(),
            correlation: CorrelationConfig::default(),
            quality: QualityConfig::default(),
            insights: InsightThresholds::default(),
            analysis_type: AnalysisTypeRules::default(),
            sampling: SamplingConfig::default(),
            charts: ChartConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the sampling settings.
    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Override how many ranked correlation pairs the bundle keeps.
    #[must_use]
    pub fn with_top_correlations(mut self, top_n: usize) -> Self {
        self.correlation.top_n = top_n;
        self
    }

    /// Check that every threshold is in range and that ordered thresholds
    /// are ordered.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        positive_finite("outliers.iqr_multiplier", self.outliers.iqr_multiplier)?;
        at_least_one("categorical.top_categories", self.categorical.top_categories)?;
        if self.categorical.low_cardinality_max > self.categorical.medium_cardinality_max {
            return Err(ConfigError::Ordering {
                field: "categorical.low_cardinality_max",
                other: "categorical.medium_cardinality_max",
            });
        }
        self.correlation.validate()?;
        self.quality.validate()?;
        self.insights.validate()?;
        at_least_one("sampling.sample_size", self.sampling.sample_size)?;
        if self.sampling.sample_size > self.sampling.row_threshold {
            return Err(ConfigError::Ordering {
                field: "sampling.sample_size",
                other: "sampling.row_threshold",
            });
        }
        Ok(())
    }
}

/// IQR fence settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// Multiplier k in `[Q1 - k*IQR, Q3 + k*IQR]`.
    pub iqr_multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: 1.5,
        }
    }
}

/// Categorical profiling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalConfig {
    /// Number of ranked categories kept per column.
    pub top_categories: usize,
    /// Largest unique count still classed as low cardinality.
    pub low_cardinality_max: usize,
    /// Largest unique count still classed as medium cardinality.
    pub medium_cardinality_max: usize,
}

impl Default for CategoricalConfig {
    fn default() -> Self {
        Self {
            top_categories: 5,
            low_cardinality_max: 10,
            medium_cardinality_max: 50,
        }
    }
}

impl CategoricalConfig {
    pub fn classify(&self, unique_count: usize) -> CardinalityClass {
        if unique_count <= self.low_cardinality_max {
            CardinalityClass::Low
        } else if unique_count <= self.medium_cardinality_max {
            CardinalityClass::Medium
        } else {
            CardinalityClass::High
        }
    }
}

/// Correlation strength cut-offs on `|r|` and ranking size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    pub very_strong: f64,
    pub strong: f64,
    pub moderate: f64,
    pub weak: f64,
    /// Number of ranked pairs kept in the bundle.
    pub top_n: usize,
    /// Minimum overlapping non-missing observations for a pair.
    pub min_observations: usize,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            very_strong: 0.9,
            strong: 0.7,
            moderate: 0.5,
            weak: 0.3,
            top_n: 10,
            min_observations: 2,
        }
    }
}

impl CorrelationConfig {
    /// Label a coefficient by its absolute value.
    pub fn classify(&self, coefficient: f64) -> CorrelationStrength {
        let magnitude = coefficient.abs();
        if magnitude >= self.very_strong {
            CorrelationStrength::VeryStrong
        } else if magnitude >= self.strong {
            CorrelationStrength::Strong
        } else if magnitude >= self.moderate {
            CorrelationStrength::Moderate
        } else if magnitude >= self.weak {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::VeryWeak
        }
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("correlation.very_strong", self.very_strong),
            ("correlation.strong", self.strong),
            ("correlation.moderate", self.moderate),
            ("correlation.weak", self.weak),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field,
                    expected: "within [0, 1]",
                    actual: value.to_string(),
                });
            }
        }
        let ordered = [
            ("correlation.weak", self.weak),
            ("correlation.moderate", self.moderate),
            ("correlation.strong", self.strong),
            ("correlation.very_strong", self.very_strong),
        ];
        for window in ordered.windows(2) {
            if window[0].1 > window[1].1 {
                return Err(ConfigError::Ordering {
                    field: window[0].0,
                    other: window[1].0,
                });
            }
        }
        if self.min_observations < 2 {
            return Err(ConfigError::OutOfRange {
                field: "correlation.min_observations",
                expected: "at least 2",
                actual: self.min_observations.to_string(),
            });
        }
        Ok(())
    }
}

/// Quality score weights.
///
/// `score = 100 - missing_weight * missing_pct - sample_penalty`, where the
/// sample penalty scales linearly from `small_sample_penalty` at zero rows
/// down to zero at `min_sample_size` rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Points deducted per percentage point of missing cells.
    pub missing_weight: f64,
    /// Row count at and above which no sample-size penalty applies.
    pub min_sample_size: usize,
    /// Largest sample-size penalty (applied to an empty sample).
    pub small_sample_penalty: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            missing_weight: 1.0,
            min_sample_size: 100,
            small_sample_penalty: 30.0,
        }
    }
}

impl QualityConfig {
    fn validate(&self) -> Result<()> {
        non_negative_finite("quality.missing_weight", self.missing_weight)?;
        non_negative_finite("quality.small_sample_penalty", self.small_sample_penalty)?;
        Ok(())
    }
}

/// Thresholds that select insight templates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// `|skewness|` above this is reported as significant skew.
    pub skew_threshold: f64,
    /// Outlier percentage above this is reported.
    pub outlier_percentage_threshold: f64,
    /// Coefficient of variation (ratio, not percent) above this is reported.
    pub cv_threshold: f64,
    /// Concentration ratio above this is reported as dominance.
    pub dominance_threshold: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            skew_threshold: 1.0,
            outlier_percentage_threshold: 5.0,
            cv_threshold: 1.0,
            dominance_threshold: 0.5,
        }
    }
}

impl InsightThresholds {
    fn validate(&self) -> Result<()> {
        non_negative_finite("insights.skew_threshold", self.skew_threshold)?;
        non_negative_finite(
            "insights.outlier_percentage_threshold",
            self.outlier_percentage_threshold,
        )?;
        non_negative_finite("insights.cv_threshold", self.cv_threshold)?;
        if !(0.0..=1.0).contains(&self.dominance_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "insights.dominance_threshold",
                expected: "within [0, 1]",
                actual: self.dominance_threshold.to_string(),
            });
        }
        Ok(())
    }
}

/// Column and row counts for the analysis-type decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisTypeRules {
    pub mixed_numeric_min: usize,
    pub mixed_categorical_min: usize,
    pub quantitative_numeric_min: usize,
    pub categorical_min: usize,
    pub large_scale_rows: usize,
}

impl Default for AnalysisTypeRules {
    fn default() -> Self {
        Self {
            mixed_numeric_min: 5,
            mixed_categorical_min: 2,
            quantitative_numeric_min: 3,
            categorical_min: 5,
            large_scale_rows: 10_000,
        }
    }
}

/// Visualization sampling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Datasets with more rows than this are sampled for charts.
    pub row_threshold: usize,
    /// Rows kept in the sample.
    pub sample_size: usize,
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            row_threshold: 10_000,
            sample_size: 10_000,
            seed: 42,
        }
    }
}

/// Chart input settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Numeric columns listed in the outlier ranking.
    pub outlier_ranking_size: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            outlier_ranking_size: 5,
        }
    }
}

fn positive_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "a positive finite number",
            actual: value.to_string(),
        })
    }
}

fn non_negative_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "a non-negative finite number",
            actual: value.to_string(),
        })
    }
}

fn at_least_one(field: &'static str, value: usize) -> Result<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected: "at least 1",
            actual: value.to_string(),
        })
    }
}
