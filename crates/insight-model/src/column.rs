use std::fmt;

use serde::{Deserialize, Serialize};

/// How a column takes part in the analysis, fixed from its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
    Unsupported,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
            ColumnKind::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ColumnKind::Unsupported)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column left out of the analysis, with the type that excluded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedColumn {
    pub name: String,
    pub data_type: String,
}

/// Partition of the dataset's columns, each list in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
    pub unsupported: Vec<UnsupportedColumn>,
}

impl ColumnClassification {
    pub fn supported_count(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }

    pub fn has_supported_columns(&self) -> bool {
        self.supported_count() > 0
    }

    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        if self.numeric.iter().any(|column| column == name) {
            Some(ColumnKind::Numeric)
        } else if self.categorical.iter().any(|column| column == name) {
            Some(ColumnKind::Categorical)
        } else if self.unsupported.iter().any(|column| column.name == name) {
            Some(ColumnKind::Unsupported)
        } else {
            None
        }
    }
}
