//! Template-driven insight sentences.
//!
//! Every sentence comes from a fixed template selected by a threshold in
//! [`InsightThresholds`]. The functions here are pure: the same bundle and
//! thresholds always produce byte-identical text.

use insight_model::{
    AnalysisBundle, AnalysisType, AnalysisTypeRules, ColumnProfile, ColumnStats,
    CorrelationPair, Insight, InsightRule, InsightSet, InsightThresholds,
};

/// Build every insight for a bundle whose stats and profiles are already
/// filled in.
///
/// `ranked_pairs` is the full ranked correlation list. The bundle keeps only
/// the top pairs, but every pair at or above weak gets a sentence.
pub fn synthesize_insights(
    bundle: &AnalysisBundle,
    ranked_pairs: &[CorrelationPair],
    thresholds: &InsightThresholds,
) -> InsightSet {
    InsightSet {
        numeric: bundle
            .numeric_stats
            .iter()
            .flat_map(|stats| numeric_insights(stats, thresholds))
            .collect(),
        categorical: bundle
            .categorical_profiles
            .iter()
            .flat_map(|profile| categorical_insights(profile, thresholds))
            .collect(),
        correlation: ranked_pairs
            .iter()
            .filter(|pair| pair.strength.is_at_least_weak())
            .map(correlation_insight)
            .collect(),
    }
}

pub fn numeric_insights(stats: &ColumnStats, thresholds: &InsightThresholds) -> Vec<Insight> {
    let name = &stats.name;
    if stats.count < 2 {
        return vec![column_insight(
            InsightRule::InsufficientData,
            name,
            format!(
                "{name} has too few values for a statistical summary ({} usable)",
                stats.count
            ),
        )];
    }

    let mut insights = Vec::new();
    if let Some(skewness) = stats.skewness.filter(|s| s.abs() > thresholds.skew_threshold) {
        let direction = if skewness > 0.0 { "right" } else { "left" };
        insights.push(column_insight(
            InsightRule::Skew,
            name,
            format!(
                "{name} shows significant {direction}-skewed distribution (skewness: {skewness:.2})"
            ),
        ));
    }
    if let Some(outliers) = stats
        .outliers
        .filter(|o| o.percentage > thresholds.outlier_percentage_threshold)
    {
        insights.push(column_insight(
            InsightRule::Outliers,
            name,
            format!(
                "{name} contains {} outliers ({:.1}% of data)",
                outliers.count, outliers.percentage
            ),
        ));
    }
    if let Some(cv) = stats
        .coefficient_of_variation
        .filter(|cv| *cv > thresholds.cv_threshold)
    {
        insights.push(column_insight(
            InsightRule::HighVariability,
            name,
            format!("{name} exhibits high variability (CV: {:.1}%)", cv * 100.0),
        ));
    }
    if insights.is_empty()
        && let (Some(mean), Some(median)) = (stats.mean, stats.median)
    {
        insights.push(column_insight(
            InsightRule::StableDistribution,
            name,
            format!("{name} is stable around a mean of {mean:.2} (median: {median:.2})"),
        ));
    }
    insights
}

pub fn categorical_insights(
    profile: &ColumnProfile,
    thresholds: &InsightThresholds,
) -> Vec<Insight> {
    let name = &profile.name;
    let Some(top) = profile.top_category() else {
        return vec![column_insight(
            InsightRule::NoValues,
            name,
            format!("{name} has no usable values"),
        )];
    };

    let mut insights = Vec::new();
    if profile
        .concentration_ratio
        .is_some_and(|ratio| ratio > thresholds.dominance_threshold)
    {
        insights.push(column_insight(
            InsightRule::Dominance,
            name,
            format!(
                "{name} is dominated by '{}' ({:.1}%)",
                top.value, top.percentage
            ),
        ));
    }
    if profile.identifier_like {
        insights.push(column_insight(
            InsightRule::Identifier,
            name,
            format!("{name} appears to be a unique identifier (all values unique)"),
        ));
    }
    if insights.is_empty() {
        insights.push(column_insight(
            InsightRule::Cardinality,
            name,
            format!(
                "{name} has {} cardinality ({} unique values)",
                profile.cardinality, profile.unique_count
            ),
        ));
    }
    insights
}

pub fn correlation_insight(pair: &CorrelationPair) -> Insight {
    let direction = if pair.is_positive() { "positive" } else { "negative" };
    Insight::new(
        InsightRule::Relationship,
        vec![pair.column_a.clone(), pair.column_b.clone()],
        format!(
            "{} {direction} correlation between {} and {} (r={:.3})",
            capitalize(pair.strength.label()),
            pair.column_a,
            pair.column_b,
            pair.coefficient
        ),
    )
}

/// First matching row of the decision table wins.
pub fn recommend_analysis_type(
    numeric_columns: usize,
    categorical_columns: usize,
    row_count: usize,
    rules: &AnalysisTypeRules,
) -> AnalysisType {
    if numeric_columns >= rules.mixed_numeric_min
        && categorical_columns >= rules.mixed_categorical_min
    {
        AnalysisType::Mixed
    } else if numeric_columns >= rules.quantitative_numeric_min {
        AnalysisType::Quantitative
    } else if categorical_columns >= rules.categorical_min {
        AnalysisType::Categorical
    } else if row_count >= rules.large_scale_rows {
        AnalysisType::LargeScaleDescriptive
    } else {
        AnalysisType::Exploratory
    }
}

fn column_insight(rule: InsightRule, column: &str, text: String) -> Insight {
    Insight::new(rule, vec![column.to_string()], text)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
