//! Deterministic statistical analysis over a tabular dataset.
//!
//! [`AnalysisEngine::analyze`] turns a [`Dataset`] into an
//! [`insight_model::AnalysisBundle`]; [`AnalysisEngine::chart_inputs`]
//! derives the renderer's view, sampling rows for large datasets.

pub mod categorical;
pub mod charts;
pub mod classifier;
pub mod correlation;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod insights;
pub mod outliers;
pub mod quality;
pub mod sampler;
pub mod stats;
pub mod values;

pub use categorical::{FrequencyTable, profile_column};
pub use charts::{CategoryChart, ChartInputs, NumericChartSummary, OutlierRank};
pub use classifier::{classify_columns, classify_dtype};
pub use correlation::{CorrelationResult, NumericColumn, correlate, pearson};
pub use dataset::Dataset;
pub use engine::{AnalysisEngine, analyze};
pub use error::{AnalysisError, Result};
pub use insights::{recommend_analysis_type, synthesize_insights};
pub use outliers::detect_outliers;
pub use quality::score_quality;
pub use sampler::{VisualizationSample, sample_frame, sample_indices};
pub use stats::describe;
