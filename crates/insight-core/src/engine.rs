//! The analysis pipeline.
//!
//! Classification runs first and fixes every column's kind. Numeric columns
//! then get stats and outlier fences, categorical columns get frequency
//! profiles, numeric pairs get correlated, and the quality score and
//! insights are derived from the assembled bundle. Any data fault is
//! isolated to its column and recorded as a warning.

use std::time::Instant;

use polars::prelude::Column;
use tracing::{debug, info, info_span, warn};

use insight_model::{
    AnalysisBundle, AnalysisConfig, AnalysisType, AnalysisWarning, BundleStatus,
    ColumnClassification, ColumnKind, ColumnProfile, ColumnStats, CorrelationMatrix, InsightSet,
    WarningKind,
};

use crate::categorical::{profile_column, profile_warnings};
use crate::charts::ChartInputs;
use crate::classifier::{classify_columns, demote_column};
use crate::correlation::{NumericColumn, correlate};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::insights::{recommend_analysis_type, synthesize_insights};
use crate::outliers::with_outliers;
use crate::quality::score_quality;
use crate::sampler::sample_frame;
use crate::stats::{describe, stats_warnings};
use crate::values::{categorical_values, missing_count, numeric_values};

/// Runs the pipeline under one validated configuration.
///
/// Holds no state besides the configuration, so one engine can serve
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::Config`] when the configuration fails
    /// validation.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a dataset. Never fails: data faults become bundle warnings.
    pub fn analyze(&self, dataset: &Dataset) -> AnalysisBundle {
        let span = info_span!(
            "analyze",
            rows = dataset.row_count(),
            columns = dataset.column_count()
        );
        let _guard = span.enter();
        let start = Instant::now();

        let (classification, warnings) = classify_columns(dataset);
        debug!(
            numeric = classification.numeric.len(),
            categorical = classification.categorical.len(),
            unsupported = classification.unsupported.len(),
            "classified columns"
        );

        let bundle = if !classification.has_supported_columns() {
            self.unanalyzed(dataset, classification, warnings, BundleStatus::NoSupportedColumns)
        } else if dataset.is_empty() {
            self.unanalyzed(dataset, classification, warnings, BundleStatus::EmptyDataset)
        } else {
            self.analyze_columns(dataset, classification, warnings)
        };

        for warning in &bundle.warnings {
            warn!(
                kind = %warning.kind,
                column = warning.column.as_deref().unwrap_or("-"),
                "{}",
                warning.message
            );
        }
        info!(
            status = ?bundle.status,
            insights = bundle.insights.len(),
            warnings = bundle.warnings.len(),
            quality = bundle.quality.score,
            duration_ms = start.elapsed().as_millis(),
            "analysis complete"
        );
        bundle
    }

    /// Build chart inputs, sampling rows when the dataset is large.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::Polars`] when row selection fails.
    pub fn chart_inputs(&self, dataset: &Dataset, bundle: &AnalysisBundle) -> Result<ChartInputs> {
        let sample = sample_frame(dataset.frame(), &self.config.sampling)?;
        debug!(
            sampled = sample.sampled,
            source_rows = sample.source_rows,
            sample_rows = sample.len(),
            "prepared chart sample"
        );
        Ok(ChartInputs::from_bundle(
            bundle,
            sample,
            self.config.charts.outlier_ranking_size,
        ))
    }

    fn analyze_columns(
        &self,
        dataset: &Dataset,
        mut classification: ColumnClassification,
        mut warnings: Vec<AnalysisWarning>,
    ) -> AnalysisBundle {
        let config = &self.config;
        let row_count = dataset.row_count();
        let mut numeric_cells: Vec<(String, Vec<Option<f64>>)> = Vec::new();
        let mut numeric_stats = Vec::new();
        let mut categorical_profiles = Vec::new();
        let mut missing_per_column = Vec::with_capacity(dataset.column_count());

        let stage = Instant::now();
        for column in dataset.columns() {
            let name = column.name().to_string();
            match classification.kind_of(&name) {
                Some(ColumnKind::Numeric) => match numeric_values(column) {
                    Ok(values) => {
                        missing_per_column.push(missing_count(&values));
                        let stats =
                            with_outliers(describe(&name, &values), config.outliers.iqr_multiplier);
                        warnings.extend(stats_warnings(&stats));
                        numeric_stats.push(stats);
                        numeric_cells.push((name, values));
                    }
                    Err(error) => {
                        reject_column(&mut classification, &mut warnings, column, &error);
                        missing_per_column.push(column.null_count());
                    }
                },
                Some(ColumnKind::Categorical) => match categorical_values(column) {
                    Ok(values) => {
                        missing_per_column.push(missing_count(&values));
                        let profile = profile_column(&name, &values, &config.categorical);
                        warnings.extend(profile_warnings(&profile));
                        categorical_profiles.push(profile);
                    }
                    Err(error) => {
                        reject_column(&mut classification, &mut warnings, column, &error);
                        missing_per_column.push(column.null_count());
                    }
                },
                Some(ColumnKind::Unsupported) | None => {
                    missing_per_column.push(column.null_count());
                }
            }
        }
        debug!(
            numeric = numeric_stats.len(),
            categorical = categorical_profiles.len(),
            duration_ms = stage.elapsed().as_millis(),
            "profiled columns"
        );

        if !classification.has_supported_columns() {
            return self.unanalyzed(
                dataset,
                classification,
                warnings,
                BundleStatus::NoSupportedColumns,
            );
        }

        let stage = Instant::now();
        let columns: Vec<NumericColumn<'_>> = numeric_cells
            .iter()
            .map(|(name, values)| NumericColumn { name, values })
            .collect();
        let correlation = correlate(&columns, &config.correlation);
        debug!(
            pairs = correlation.ranked.len(),
            duration_ms = stage.elapsed().as_millis(),
            "correlated numeric columns"
        );

        let quality = score_quality(row_count, &missing_per_column, &config.quality);
        let recommended_analysis_type = recommend_analysis_type(
            classification.numeric.len(),
            classification.categorical.len(),
            row_count,
            &config.analysis_type,
        );

        let mut bundle = AnalysisBundle {
            status: BundleStatus::Complete,
            thresholds_version: config.version,
            row_count,
            column_count: dataset.column_count(),
            columns: classification,
            numeric_stats,
            categorical_profiles,
            correlations: correlation.top(config.correlation.top_n),
            strongest_correlation: correlation.strongest().cloned(),
            correlation_matrix: correlation.matrix,
            quality,
            insights: InsightSet::default(),
            recommended_analysis_type,
            warnings,
        };
        bundle.insights = synthesize_insights(&bundle, &correlation.ranked, &config.insights);
        bundle
    }

    /// Bundle for a dataset the pipeline cannot analyze: no rows or no
    /// supported columns. Per-column results are present but undefined.
    fn unanalyzed(
        &self,
        dataset: &Dataset,
        classification: ColumnClassification,
        mut warnings: Vec<AnalysisWarning>,
        status: BundleStatus,
    ) -> AnalysisBundle {
        let row_count = dataset.row_count();
        if row_count == 0 {
            warnings.push(AnalysisWarning::dataset(
                WarningKind::EmptyDataset,
                "dataset has no rows; every derived metric is undefined",
            ));
        }
        let missing_per_column: Vec<usize> = dataset.columns().map(Column::null_count).collect();
        let numeric_stats = classification
            .numeric
            .iter()
            .map(|name| ColumnStats::undefined(name.as_str(), 0, row_count))
            .collect();
        let categorical_profiles: Vec<ColumnProfile> = classification
            .categorical
            .iter()
            .map(|name| profile_column(name, &[], &self.config.categorical))
            .collect();
        AnalysisBundle {
            status,
            thresholds_version: self.config.version,
            row_count,
            column_count: dataset.column_count(),
            correlation_matrix: CorrelationMatrix {
                columns: classification.numeric.clone(),
                values: vec![vec![None; classification.numeric.len()]; classification.numeric.len()],
            },
            columns: classification,
            numeric_stats,
            categorical_profiles,
            correlations: Vec::new(),
            strongest_correlation: None,
            quality: score_quality(row_count, &missing_per_column, &self.config.quality),
            insights: InsightSet::default(),
            recommended_analysis_type: AnalysisType::Exploratory,
            warnings,
        }
    }
}

fn reject_column(
    classification: &mut ColumnClassification,
    warnings: &mut Vec<AnalysisWarning>,
    column: &Column,
    error: &polars::prelude::PolarsError,
) {
    let name = column.name().to_string();
    let data_type = column.dtype().to_string();
    warnings.push(AnalysisWarning::for_column(
        WarningKind::MalformedColumn,
        &name,
        format!("values of {data_type} column could not be read ({error}); column excluded"),
    ));
    demote_column(classification, &name, data_type);
}

/// Analyze a dataset under `config`.
///
/// # Errors
///
/// Returns [`crate::AnalysisError::Config`] when the configuration fails
/// validation.
pub fn analyze(dataset: &Dataset, config: &AnalysisConfig) -> Result<AnalysisBundle> {
    Ok(AnalysisEngine::new(config.clone())?.analyze(dataset))
}
