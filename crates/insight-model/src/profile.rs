use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardinalityClass {
    Low,
    Medium,
    High,
}

impl CardinalityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardinalityClass::Low => "low",
            CardinalityClass::Medium => "medium",
            CardinalityClass::High => "high",
        }
    }
}

impl fmt::Display for CardinalityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    /// Share of non-missing values, in percent.
    pub percentage: f64,
}

/// Frequency profile of one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub count: usize,
    pub missing: usize,
    pub missing_percentage: f64,
    pub unique_count: usize,
    /// Most frequent categories, count descending, first-seen order on ties.
    pub top_categories: Vec<CategoryCount>,
    /// Top category count over non-missing count.
    pub concentration_ratio: Option<f64>,
    /// Shannon entropy in bits over the full frequency table.
    pub entropy: Option<f64>,
    pub cardinality: CardinalityClass,
    pub identifier_like: bool,
}

impl ColumnProfile {
    pub fn is_defined(&self) -> bool {
        self.count > 0
    }

    pub fn top_category(&self) -> Option<&CategoryCount> {
        self.top_categories.first()
    }
}
