use std::io::Write;

use insight_cli::logging::{LogConfig, LogFormat, default_directives};
use insight_cli::settings::{ConfigOverrides, apply_overrides, load_config};
use insight_core::{AnalysisEngine, Dataset};
use insight_model::AnalysisConfig;
use polars::prelude::{IntoColumn, NamedFrom, Series};
use tempfile::NamedTempFile;
use tracing::level_filters::LevelFilter;

#[test]
fn test_no_path_gives_defaults() {
    assert_eq!(load_config(None).unwrap(), AnalysisConfig::default());
}

#[test]
fn test_partial_json_keeps_other_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"insights": {{"skew_threshold": 0.5}}, "correlation": {{"top_n": 3}}}}"#
    )
    .unwrap();

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.insights.skew_threshold, 0.5);
    assert_eq!(config.insights.cv_threshold, 1.0);
    assert_eq!(config.correlation.top_n, 3);
    assert_eq!(config.correlation.very_strong, 0.9);
    assert_eq!(config.sampling, AnalysisConfig::default().sampling);
}

#[test]
fn test_malformed_json_names_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();

    let error = load_config(Some(file.path())).unwrap_err();

    assert!(format!("{error:#}").contains("parse config"));
}

#[test]
fn test_lower_threshold_caps_sample_size() {
    let overrides = ConfigOverrides {
        sample_threshold: Some(50),
        seed: Some(7),
        ..ConfigOverrides::default()
    };
    let config = apply_overrides(AnalysisConfig::default(), &overrides);

    assert!(config.validate().is_ok());
    insta::assert_json_snapshot!(config.sampling, @r#"
    {
      "row_threshold": 50,
      "sample_size": 50,
      "seed": 7
    }
    "#);
}

#[test]
fn test_explicit_sample_size_wins() {
    let overrides = ConfigOverrides {
        sample_threshold: Some(500),
        sample_size: Some(100),
        top_correlations: Some(4),
        ..ConfigOverrides::default()
    };
    let config = apply_overrides(AnalysisConfig::default(), &overrides);

    assert_eq!(config.sampling.row_threshold, 500);
    assert_eq!(config.sampling.sample_size, 100);
    assert_eq!(config.correlation.top_n, 4);
}

#[test]
fn test_log_config_builders() {
    let config = LogConfig::default()
        .with_level(LevelFilter::DEBUG)
        .with_format(LogFormat::Json)
        .with_log_file(None);

    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.log_file.is_none());
    assert!(default_directives(config.level_filter).contains("insight_core=debug"));
}

fn chart_json(overrides: &ConfigOverrides) -> serde_json::Value {
    let values: Vec<f64> = (0..300).map(|row| f64::from((row * 17) % 89)).collect();
    let dataset = Dataset::from_columns(vec![Series::new("v".into(), values).into_column()])
        .unwrap();
    let engine = AnalysisEngine::new(apply_overrides(AnalysisConfig::default(), overrides))
        .unwrap();
    let bundle = engine.analyze(&dataset);
    serde_json::to_value(engine.chart_inputs(&dataset, &bundle).unwrap()).unwrap()
}

#[test]
fn test_sampling_overrides_shape_chart_output() {
    let defaults = chart_json(&ConfigOverrides::default());
    assert_eq!(defaults["sample"]["sampled"], false);
    assert_eq!(defaults["sample"]["row_indices"].as_array().unwrap().len(), 300);
    assert!(defaults["sample"].get("frame").is_none());

    let sampled = |seed| ConfigOverrides {
        sample_threshold: Some(100),
        sample_size: Some(25),
        seed: Some(seed),
        ..ConfigOverrides::default()
    };
    let first = chart_json(&sampled(1));
    assert_eq!(first["sample"]["sampled"], true);
    assert_eq!(first["sample"]["source_rows"], 300);
    assert_eq!(first["sample"]["row_indices"].as_array().unwrap().len(), 25);
    assert_eq!(first, chart_json(&sampled(1)));
    assert_ne!(
        first["sample"]["row_indices"],
        chart_json(&sampled(2))["sample"]["row_indices"]
    );
    assert_eq!(first["numeric"], defaults["numeric"]);
}
