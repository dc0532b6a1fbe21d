use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::ColumnClassification;
use crate::correlation::{CorrelationMatrix, CorrelationPair};
use crate::insight::{Insight, InsightSet};
use crate::profile::ColumnProfile;
use crate::quality::{MissingDataSummary, QualityScore};
use crate::stats::ColumnStats;
use crate::warning::{AnalysisWarning, WarningKind};

/// Recommended analysis strategy, chosen by a fixed decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisType {
    #[serde(rename = "Mixed Analysis")]
    Mixed,
    #[serde(rename = "Quantitative Analysis")]
    Quantitative,
    #[serde(rename = "Categorical Analysis")]
    Categorical,
    #[serde(rename = "Large-Scale Descriptive Analysis")]
    LargeScaleDescriptive,
    #[serde(rename = "Exploratory Data Analysis")]
    Exploratory,
}

impl AnalysisType {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisType::Mixed => "Mixed Analysis",
            AnalysisType::Quantitative => "Quantitative Analysis",
            AnalysisType::Categorical => "Categorical Analysis",
            AnalysisType::LargeScaleDescriptive => "Large-Scale Descriptive Analysis",
            AnalysisType::Exploratory => "Exploratory Data Analysis",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleStatus {
    Complete,
    /// Zero rows; derived metrics are undefined or zero.
    EmptyDataset,
    /// No numeric or categorical column; the bundle carries no analysis.
    NoSupportedColumns,
}

/// Everything the engine derived from one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub status: BundleStatus,
    /// Version of the threshold table used.
    pub thresholds_version: u32,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: ColumnClassification,
    pub numeric_stats: Vec<ColumnStats>,
    pub categorical_profiles: Vec<ColumnProfile>,
    /// Ranked pairs, `|r|` descending, truncated to the configured top-N.
    pub correlations: Vec<CorrelationPair>,
    pub correlation_matrix: CorrelationMatrix,
    pub strongest_correlation: Option<CorrelationPair>,
    pub quality: QualityScore,
    pub insights: InsightSet,
    pub recommended_analysis_type: AnalysisType,
    pub warnings: Vec<AnalysisWarning>,
}

impl AnalysisBundle {
    pub fn is_complete(&self) -> bool {
        self.status == BundleStatus::Complete
    }

    pub fn numeric_stats_for(&self, name: &str) -> Option<&ColumnStats> {
        self.numeric_stats.iter().find(|stats| stats.name == name)
    }

    pub fn profile_for(&self, name: &str) -> Option<&ColumnProfile> {
        self.categorical_profiles
            .iter()
            .find(|profile| profile.name == name)
    }

    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &AnalysisWarning> {
        self.warnings
            .iter()
            .filter(move |warning| warning.kind == kind)
    }

    /// The subset of the bundle the narrative generator consumes.
    pub fn narrative_inputs(&self) -> NarrativeInputs {
        NarrativeInputs {
            numeric_insights: texts(&self.insights.numeric),
            categorical_insights: texts(&self.insights.categorical),
            correlation_insights: texts(&self.insights.correlation),
            data_quality_score: self.quality.score,
            recommended_analysis_type: self.recommended_analysis_type.label().to_string(),
            missing_data_summary: self.quality.missing_summary(),
        }
    }
}

fn texts(insights: &[Insight]) -> Vec<String> {
    insights.iter().map(|insight| insight.text.clone()).collect()
}

/// Narrative generator contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeInputs {
    pub numeric_insights: Vec<String>,
    pub categorical_insights: Vec<String>,
    pub correlation_insights: Vec<String>,
    pub data_quality_score: f64,
    pub recommended_analysis_type: String,
    pub missing_data_summary: MissingDataSummary,
}
