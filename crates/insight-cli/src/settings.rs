//! Threshold configuration loading for the CLI.

use std::path::Path;

use anyhow::{Context, Result};
use insight_model::AnalysisConfig;

/// Command-line values that replace configuration fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub sample_threshold: Option<usize>,
    pub sample_size: Option<usize>,
    pub seed: Option<u64>,
    pub top_correlations: Option<usize>,
}

/// Read a JSON configuration, or the defaults when no path is given.
///
/// Missing fields keep their default values. Validation is left to the
/// engine.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}

/// Apply command-line overrides.
///
/// A lowered sample threshold also caps the sample size unless one is given
/// explicitly.
pub fn apply_overrides(mut config: AnalysisConfig, overrides: &ConfigOverrides) -> AnalysisConfig {
    if let Some(threshold) = overrides.sample_threshold {
        config.sampling.row_threshold = threshold;
        config.sampling.sample_size = config.sampling.sample_size.min(threshold);
    }
    if let Some(size) = overrides.sample_size {
        config.sampling.sample_size = size;
    }
    if let Some(seed) = overrides.seed {
        config.sampling.seed = seed;
    }
    if let Some(top_n) = overrides.top_correlations {
        config = config.with_top_correlations(top_n);
    }
    config
}
