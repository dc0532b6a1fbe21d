//! Inputs for the chart renderer.

use serde::Serialize;

use insight_model::{AnalysisBundle, CategoryCount, CorrelationMatrix, CorrelationPair};

use crate::sampler::VisualizationSample;

/// Location and fences for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericChartSummary {
    pub column: String,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    pub column: String,
    pub top_categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierRank {
    pub column: String,
    pub count: usize,
    pub percentage: f64,
}

/// Everything chart rendering needs. The sample is the only part not
/// derived from the bundle.
#[derive(Debug, Clone, Serialize)]
pub struct ChartInputs {
    pub numeric: Vec<NumericChartSummary>,
    pub correlation_matrix: CorrelationMatrix,
    pub categories: Vec<CategoryChart>,
    pub strongest_correlation: Option<CorrelationPair>,
    /// Numeric columns with the most outliers, count descending.
    pub outlier_ranking: Vec<OutlierRank>,
    pub sample: VisualizationSample,
}

impl ChartInputs {
    pub fn from_bundle(
        bundle: &AnalysisBundle,
        sample: VisualizationSample,
        outlier_ranking_size: usize,
    ) -> Self {
        let numeric = bundle
            .numeric_stats
            .iter()
            .map(|stats| NumericChartSummary {
                column: stats.name.clone(),
                mean: stats.mean,
                median: stats.median,
                lower_bound: stats.outliers.map(|o| o.lower_bound),
                upper_bound: stats.outliers.map(|o| o.upper_bound),
            })
            .collect();
        let categories = bundle
            .categorical_profiles
            .iter()
            .map(|profile| CategoryChart {
                column: profile.name.clone(),
                top_categories: profile.top_categories.clone(),
            })
            .collect();
        Self {
            numeric,
            correlation_matrix: bundle.correlation_matrix.clone(),
            categories,
            strongest_correlation: bundle.strongest_correlation.clone(),
            outlier_ranking: outlier_ranking(bundle, outlier_ranking_size),
            sample,
        }
    }
}

/// Columns with outlier summaries, most outliers first; ties keep dataset
/// order.
pub fn outlier_ranking(bundle: &AnalysisBundle, size: usize) -> Vec<OutlierRank> {
    let mut ranking: Vec<OutlierRank> = bundle
        .numeric_stats
        .iter()
        .filter_map(|stats| {
            let outliers = stats.outliers?;
            Some(OutlierRank {
                column: stats.name.clone(),
                count: outliers.count,
                percentage: outliers.percentage,
            })
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(size);
    ranking
}
