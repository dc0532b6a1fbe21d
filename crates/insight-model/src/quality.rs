use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityRating {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl QualityRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            QualityRating::Excellent
        } else if score >= 60.0 {
            QualityRating::Good
        } else if score >= 40.0 {
            QualityRating::Moderate
        } else {
            QualityRating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityRating::Excellent => "excellent",
            QualityRating::Good => "good",
            QualityRating::Moderate => "moderate",
            QualityRating::Poor => "poor",
        }
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset-wide missing cell counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingDataSummary {
    pub columns_with_missing: usize,
    pub total_missing_cells: usize,
    pub missing_percentage: f64,
}

/// Composite completeness and sample-size score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Clamped to `[0, 100]`.
    pub score: f64,
    pub missing_percentage: f64,
    pub columns_with_missing: usize,
    pub total_missing_cells: usize,
    /// Points deducted for a small sample.
    pub sample_penalty: f64,
    pub rating: QualityRating,
}

impl QualityScore {
    pub fn missing_summary(&self) -> MissingDataSummary {
        MissingDataSummary {
            columns_with_missing: self.columns_with_missing,
            total_missing_cells: self.total_missing_cells,
            missing_percentage: self.missing_percentage,
        }
    }
}
