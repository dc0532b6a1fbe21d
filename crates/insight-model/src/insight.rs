use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Numeric,
    Categorical,
    Correlation,
}

/// The template that produced an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightRule {
    Skew,
    Outliers,
    HighVariability,
    StableDistribution,
    InsufficientData,
    Dominance,
    Identifier,
    Cardinality,
    NoValues,
    Relationship,
}

impl InsightRule {
    pub fn category(&self) -> InsightCategory {
        match self {
            InsightRule::Skew
            | InsightRule::Outliers
            | InsightRule::HighVariability
            | InsightRule::StableDistribution
            | InsightRule::InsufficientData => InsightCategory::Numeric,
            InsightRule::Dominance
            | InsightRule::Identifier
            | InsightRule::Cardinality
            | InsightRule::NoValues => InsightCategory::Categorical,
            InsightRule::Relationship => InsightCategory::Correlation,
        }
    }
}

/// A natural-language finding, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub rule: InsightRule,
    /// Columns the sentence talks about.
    pub columns: Vec<String>,
    pub text: String,
}

impl Insight {
    pub fn new(rule: InsightRule, columns: Vec<String>, text: String) -> Self {
        Self {
            category: rule.category(),
            rule,
            columns,
            text,
        }
    }
}

/// Insights grouped by category, each group in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSet {
    pub numeric: Vec<Insight>,
    pub categorical: Vec<Insight>,
    pub correlation: Vec<Insight>,
}

impl InsightSet {
    pub fn len(&self) -> usize {
        self.numeric.len() + self.categorical.len() + self.correlation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Insight> {
        self.numeric
            .iter()
            .chain(&self.categorical)
            .chain(&self.correlation)
    }
}
