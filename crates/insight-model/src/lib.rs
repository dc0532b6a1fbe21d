pub mod bundle;
pub mod column;
pub mod config;
pub mod correlation;
pub mod error;
pub mod insight;
pub mod profile;
pub mod quality;
pub mod stats;
pub mod warning;

pub use bundle::{AnalysisBundle, AnalysisType, BundleStatus, NarrativeInputs};
pub use column::{ColumnClassification, ColumnKind, UnsupportedColumn};
pub use config::{
    AnalysisConfig, AnalysisTypeRules, CategoricalConfig, ChartConfig, CorrelationConfig,
    InsightThresholds, OutlierConfig, QualityConfig, SamplingConfig, THRESHOLDS_VERSION,
};
pub use correlation::{CorrelationMatrix, CorrelationPair, CorrelationStrength};
pub use error::{ConfigError, Result};
pub use insight::{Insight, InsightCategory, InsightRule, InsightSet};
pub use profile::{CardinalityClass, CategoryCount, ColumnProfile};
pub use quality::{MissingDataSummary, QualityRating, QualityScore};
pub use stats::{ColumnStats, OutlierSummary, percentage};
pub use warning::{AnalysisWarning, WarningKind};
