//! Error types for the analysis engine.
//!
//! Data faults (bad columns, empty datasets, constant columns) are not errors;
//! they become warnings inside the bundle. These variants cover the cases the
//! caller has to handle: a rejected configuration or a failed frame operation.

use polars::prelude::PolarsError;
use thiserror::Error;

use insight_model::ConfigError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Threshold configuration failed validation.
    #[error("invalid analysis configuration: {0}")]
    Config(#[from] ConfigError),

    /// DataFrame construction or row selection failed.
    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
