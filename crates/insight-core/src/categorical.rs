//! Frequency profiling for categorical columns.

use std::collections::HashMap;

use insight_model::{
    AnalysisWarning, CategoricalConfig, CategoryCount, ColumnProfile, WarningKind, percentage,
};

use crate::values::missing_count;

/// Full frequency table over a column's non-missing values.
///
/// Entries are ordered by count descending; equal counts keep the order in
/// which the values were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    pub entries: Vec<CategoryCount>,
    pub total: usize,
}

impl FrequencyTable {
    pub fn build(values: &[Option<String>]) -> Self {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for value in values.iter().flatten() {
            match positions.get(value.as_str()) {
                Some(&index) => counts[index].1 += 1,
                None => {
                    positions.insert(value.as_str(), counts.len());
                    counts.push((value.as_str(), 1));
                }
            }
        }
        // Stable sort keeps first-seen order among ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        let entries = counts
            .into_iter()
            .map(|(value, count)| CategoryCount {
                value: value.to_string(),
                count,
                percentage: percentage(count, total),
            })
            .collect();
        Self { entries, total }
    }

    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    pub fn top(&self, n: usize) -> Vec<CategoryCount> {
        self.entries.iter().take(n).cloned().collect()
    }

    pub fn concentration_ratio(&self) -> Option<f64> {
        let top = self.entries.first()?;
        Some(top.count as f64 / self.total as f64)
    }

    /// Shannon entropy in bits over every entry.
    pub fn entropy(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let total = self.total as f64;
        let entropy = self.entries.iter().fold(0.0, |acc, entry| {
            let p = entry.count as f64 / total;
            acc + -p * p.log2()
        });
        Some(entropy)
    }
}

/// Profile one categorical column.
pub fn profile_column(
    name: &str,
    values: &[Option<String>],
    config: &CategoricalConfig,
) -> ColumnProfile {
    let table = FrequencyTable::build(values);
    let missing = missing_count(values);
    let unique_count = table.unique_count();
    ColumnProfile {
        name: name.to_string(),
        count: table.total,
        missing,
        missing_percentage: percentage(missing, values.len()),
        unique_count,
        top_categories: table.top(config.top_categories),
        concentration_ratio: table.concentration_ratio(),
        entropy: table.entropy(),
        cardinality: config.classify(unique_count),
        identifier_like: table.total > 0 && unique_count == table.total,
    }
}

pub fn profile_warnings(profile: &ColumnProfile) -> Vec<AnalysisWarning> {
    if profile.count == 0 {
        vec![AnalysisWarning::for_column(
            WarningKind::InsufficientData,
            &profile.name,
            "no non-missing values; concentration and entropy are undefined",
        )]
    } else {
        Vec::new()
    }
}
