use std::fmt;

use serde::{Deserialize, Serialize};

/// Data faults the pipeline absorbs instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Column type cannot be analyzed; excluded from classification.
    MalformedColumn,
    /// Column has fewer than two usable values.
    InsufficientData,
    /// Column has zero variance.
    DegenerateDistribution,
    /// Dataset has no rows.
    EmptyDataset,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::MalformedColumn => "malformed_column",
            WarningKind::InsufficientData => "insufficient_data",
            WarningKind::DegenerateDistribution => "degenerate_distribution",
            WarningKind::EmptyDataset => "empty_dataset",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWarning {
    pub kind: WarningKind,
    /// Column the warning applies to, if any.
    pub column: Option<String>,
    pub message: String,
}

impl AnalysisWarning {
    pub fn for_column(kind: WarningKind, column: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            column: Some(column.to_string()),
            message: message.into(),
        }
    }

    pub fn dataset(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            column: None,
            message: message.into(),
        }
    }
}
