use std::fmt;

use serde::{Deserialize, Serialize};

/// Strength label for `|r|`, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl CorrelationStrength {
    pub fn label(&self) -> &'static str {
        match self {
            CorrelationStrength::VeryStrong => "very strong",
            CorrelationStrength::Strong => "strong",
            CorrelationStrength::Moderate => "moderate",
            CorrelationStrength::Weak => "weak",
            CorrelationStrength::VeryWeak => "very weak",
        }
    }

    /// True for `Weak` and every stronger label.
    pub fn is_at_least_weak(&self) -> bool {
        *self <= CorrelationStrength::Weak
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pearson correlation between two distinct numeric columns.
///
/// `column_a` is the column that comes first in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub column_a: String,
    pub column_b: String,
    pub coefficient: f64,
    pub strength: CorrelationStrength,
    /// Rows where both columns had a value.
    pub observations: usize,
}

impl CorrelationPair {
    pub fn involves(&self, column: &str) -> bool {
        self.column_a == column || self.column_b == column
    }

    pub fn is_positive(&self) -> bool {
        self.coefficient > 0.0
    }
}

/// Square correlation matrix over the numeric columns, in dataset order.
///
/// Pairs that could not be correlated are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, column_a: &str, column_b: &str) -> Option<f64> {
        let row = self.columns.iter().position(|name| name == column_a)?;
        let col = self.columns.iter().position(|name| name == column_b)?;
        self.values.get(row)?.get(col).copied().flatten()
    }
}
