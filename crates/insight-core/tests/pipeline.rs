//! End-to-end analysis over small in-memory datasets.

use insight_core::{AnalysisEngine, Dataset, analyze};
use insight_model::{
    AnalysisConfig, AnalysisType, BundleStatus, ColumnKind, CorrelationStrength, InsightRule,
    QualityRating, WarningKind,
};
use polars::prelude::{Column, DataType, IntoColumn, NamedFrom, Series};

fn numeric(name: &str, values: &[f64]) -> Column {
    Series::new(name.into(), values).into_column()
}

fn text(name: &str, values: &[Option<&str>]) -> Column {
    Series::new(name.into(), values).into_column()
}

fn dataset(columns: Vec<Column>) -> Dataset {
    Dataset::from_columns(columns).expect("build dataset")
}

fn three_numeric_columns() -> Dataset {
    dataset(vec![
        numeric("x", &[1.0, 2.0, 3.0, 4.0, 100.0]),
        numeric("y", &[10.0, 20.0, 30.0, 40.0, 50.0]),
        numeric("z", &[5.0, 5.0, 5.0, 5.0, 5.0]),
    ])
}

#[test]
fn three_numeric_columns_recommend_quantitative() {
    let bundle = AnalysisEngine::default().analyze(&three_numeric_columns());

    assert_eq!(bundle.status, BundleStatus::Complete);
    assert_eq!(
        bundle.recommended_analysis_type,
        AnalysisType::Quantitative
    );
    assert_eq!(bundle.columns.numeric, vec!["x", "y", "z"]);
    assert!(bundle.columns.categorical.is_empty());

    let x = bundle.numeric_stats_for("x").expect("x stats");
    assert_eq!(x.outlier_count(), Some(1));
    let fences = x.outliers.expect("x fences");
    assert!(100.0 > fences.upper_bound);

    let z = bundle.numeric_stats_for("z").expect("z stats");
    assert_eq!(z.coefficient_of_variation, Some(0.0));
    assert_eq!(z.outlier_count(), Some(0));
    assert_eq!(bundle.warnings_of(WarningKind::DegenerateDistribution).count(), 1);
}

#[test]
fn scenario_insight_text() {
    let bundle = AnalysisEngine::default().analyze(&three_numeric_columns());
    let numeric: Vec<&str> = bundle
        .insights
        .numeric
        .iter()
        .map(|insight| insight.text.as_str())
        .collect();
    insta::assert_snapshot!(numeric.join("\n"), @r"
    x shows significant right-skewed distribution (skewness: 1.50)
    x contains 1 outliers (20.0% of data)
    x exhibits high variability (CV: 198.3%)
    y is stable around a mean of 30.00 (median: 30.00)
    z is stable around a mean of 5.00 (median: 5.00)
    ");

    assert_eq!(bundle.correlations.len(), 1);
    let pair = &bundle.correlations[0];
    assert_eq!((pair.column_a.as_str(), pair.column_b.as_str()), ("x", "y"));
    assert_eq!(pair.strength, CorrelationStrength::Strong);
    assert_eq!(
        bundle.insights.correlation[0].text,
        "Strong positive correlation between x and y (r=0.725)"
    );
    assert_eq!(bundle.strongest_correlation.as_ref(), Some(pair));
}

#[test]
fn dominant_category_gets_dominance_insight() {
    let bundle = AnalysisEngine::default().analyze(&dataset(vec![text(
        "grade",
        &[Some("A"), Some("A"), Some("A"), Some("B")],
    )]));

    let profile = bundle.profile_for("grade").expect("profile");
    assert_eq!(profile.concentration_ratio, Some(0.75));
    assert_eq!(bundle.insights.categorical.len(), 1);
    assert_eq!(bundle.insights.categorical[0].rule, InsightRule::Dominance);
    assert_eq!(
        bundle.insights.categorical[0].text,
        "grade is dominated by 'A' (75.0%)"
    );
}

#[test]
fn missing_cells_feed_quality_score() {
    let bundle = AnalysisEngine::default().analyze(&dataset(vec![
        Series::new("a".into(), &[Some(1.0), None, Some(3.0), Some(4.0)]).into_column(),
        text("b", &[Some("u"), Some(" "), Some("v"), Some("w")]),
        Series::full_null("blob".into(), 4, &DataType::Null).into_column(),
    ]));

    // 1 numeric null + 1 blank text + 4 unsupported nulls over 12 cells.
    assert_eq!(bundle.quality.total_missing_cells, 6);
    assert_eq!(bundle.quality.columns_with_missing, 3);
    assert_eq!(bundle.quality.missing_percentage, 50.0);
    // 100 - 50 - 30 * 96 / 100
    assert!((bundle.quality.score - 21.2).abs() < 1e-9);
    assert_eq!(bundle.quality.rating, QualityRating::Poor);
    assert_eq!(bundle.columns.kind_of("blob"), Some(ColumnKind::Unsupported));

    let narrative = bundle.narrative_inputs();
    assert_eq!(narrative.missing_data_summary.total_missing_cells, 6);
    assert_eq!(narrative.data_quality_score, bundle.quality.score);
}

#[test]
fn boolean_column_profiles_as_labels() {
    let bundle = AnalysisEngine::default().analyze(&dataset(vec![
        Series::new("flag".into(), &[true, false, true, true]).into_column(),
    ]));
    let profile = bundle.profile_for("flag").expect("profile");
    assert_eq!(profile.top_categories[0].value, "true");
    assert_eq!(profile.top_categories[0].count, 3);
}

#[test]
fn mixed_dataset_recommends_mixed_analysis() {
    let mut columns: Vec<Column> = (0..5)
        .map(|i| {
            let values: Vec<f64> = (0..8).map(|row| f64::from(row * (i + 1) + (row % 3))).collect();
            numeric(&format!("n{i}"), &values)
        })
        .collect();
    columns.push(text("region", &[Some("n"), Some("s"), Some("n"), Some("e"), Some("w"), Some("s"), Some("n"), Some("e")]));
    columns.push(text("tier", &[Some("a"), Some("b"), Some("a"), Some("b"), Some("a"), Some("b"), Some("a"), Some("b")]));

    let bundle = AnalysisEngine::default().analyze(&dataset(columns));
    assert_eq!(bundle.recommended_analysis_type, AnalysisType::Mixed);
    assert!(bundle.correlations.len() <= 10);
    for pair in &bundle.correlations {
        assert_ne!(pair.column_a, pair.column_b);
    }
}

#[test]
fn top_correlations_are_truncated() {
    let columns: Vec<Column> = (0..6)
        .map(|i| {
            let values: Vec<f64> = (0..10)
                .map(|row| f64::from(row) * f64::from(i + 1) + f64::from((row * (i + 2)) % 5))
                .collect();
            numeric(&format!("c{i}"), &values)
        })
        .collect();
    let config = AnalysisConfig::default().with_top_correlations(3);
    let bundle = analyze(&dataset(columns), &config).expect("valid config");

    assert_eq!(bundle.correlations.len(), 3);
    assert_eq!(bundle.correlation_matrix.columns.len(), 6);
    assert_eq!(bundle.strongest_correlation.as_ref(), bundle.correlations.first());
}

#[test]
fn every_weak_or_stronger_pair_gets_an_insight_past_top_n() {
    let columns: Vec<Column> = (0..6)
        .map(|i| {
            let values: Vec<f64> = (0..8)
                .map(|row| f64::from(row) + f64::from((row * (i + 1)) % 3) * 0.1)
                .collect();
            numeric(&format!("c{i}"), &values)
        })
        .collect();
    let bundle = AnalysisEngine::default().analyze(&dataset(columns));

    let weak_or_stronger = bundle
        .correlation_matrix
        .columns
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            bundle.correlation_matrix.columns[i + 1..]
                .iter()
                .map(move |b| (a.as_str(), b.as_str()))
        })
        .filter(|(a, b)| {
            bundle
                .correlation_matrix
                .get(a, b)
                .is_some_and(|r| r.abs() >= AnalysisConfig::default().correlation.weak)
        })
        .count();

    assert_eq!(weak_or_stronger, 15);
    assert_eq!(bundle.correlations.len(), 10);
    assert_eq!(bundle.insights.correlation.len(), 15);
}

#[test]
fn very_strong_pair_ranks_ahead_of_moderate_pair() {
    // b and c never share a row, so only a~b and a~c are correlatable.
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = [
        Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(6.0), Some(5.0),
        None, None, None, None, None, None,
    ];
    let c = [
        None, None, None, None, None, None,
        Some(1.0), Some(2.0), Some(4.0), Some(6.0), Some(5.0), Some(3.0),
    ];
    let bundle = AnalysisEngine::default().analyze(&dataset(vec![
        numeric("a", &a),
        Series::new("b".into(), &b).into_column(),
        Series::new("c".into(), &c).into_column(),
    ]));

    let pairs: Vec<(&str, &str, CorrelationStrength)> = bundle
        .correlations
        .iter()
        .map(|pair| (pair.column_a.as_str(), pair.column_b.as_str(), pair.strength))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a", "b", CorrelationStrength::VeryStrong),
            ("a", "c", CorrelationStrength::Moderate),
        ]
    );
    assert!((bundle.correlations[0].coefficient - 0.942_857_142_857).abs() < 1e-9);
    assert!((bundle.correlations[1].coefficient - 0.6).abs() < 1e-9);
    assert_eq!(bundle.correlation_matrix.get("b", "c"), None);

    let texts: Vec<&str> = bundle
        .insights
        .correlation
        .iter()
        .map(|insight| insight.text.as_str())
        .collect();
    insta::assert_snapshot!(texts.join("\n"), @r"
    Very strong positive correlation between a and b (r=0.943)
    Moderate positive correlation between a and c (r=0.600)
    ");
}

#[test]
fn constant_inexact_column_is_never_correlated() {
    let x: Vec<f64> = (0..7).map(f64::from).collect();
    let bundle = AnalysisEngine::default().analyze(&dataset(vec![
        numeric("x", &x),
        numeric("flat", &[0.1; 7]),
    ]));

    assert!(bundle.correlations.is_empty());
    assert_eq!(bundle.strongest_correlation, None);
    assert!(bundle.insights.correlation.is_empty());
    assert_eq!(bundle.correlation_matrix.get("flat", "flat"), None);
}

#[test]
fn no_supported_columns_returns_flagged_bundle() {
    let bundle = AnalysisEngine::default().analyze(&dataset(vec![
        Series::full_null("a".into(), 3, &DataType::Null).into_column(),
    ]));
    assert_eq!(bundle.status, BundleStatus::NoSupportedColumns);
    assert!(!bundle.is_complete());
    assert!(bundle.numeric_stats.is_empty());
    assert!(bundle.categorical_profiles.is_empty());
    assert_eq!(
        bundle.recommended_analysis_type,
        AnalysisType::Exploratory
    );
}

#[test]
fn invalid_configuration_is_rejected() {
    let mut config = AnalysisConfig::default();
    config.correlation.strong = 0.95;
    assert!(AnalysisEngine::new(config.clone()).is_err());
    assert!(analyze(&three_numeric_columns(), &config).is_err());
}

#[test]
fn bundle_serializes_with_thresholds_version() {
    let bundle = AnalysisEngine::default().analyze(&three_numeric_columns());
    let json = serde_json::to_value(&bundle).expect("serialize");
    assert_eq!(json["thresholds_version"], 1);
    assert_eq!(json["status"], "complete");
    assert_eq!(json["recommended_analysis_type"], "Quantitative Analysis");
    assert!(json["numeric_stats"][2]["skewness"].is_null());
}
