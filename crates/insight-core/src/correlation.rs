//! Pairwise Pearson correlation over numeric columns.

use std::cmp::Ordering;

use insight_model::{CorrelationConfig, CorrelationMatrix, CorrelationPair};

/// One numeric column's cells, borrowed for correlation.
#[derive(Debug, Clone, Copy)]
pub struct NumericColumn<'a> {
    pub name: &'a str,
    pub values: &'a [Option<f64>],
}

/// Output of [`correlate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorrelationResult {
    /// Every correlatable pair, ranked. Not truncated.
    pub ranked: Vec<CorrelationPair>,
    pub matrix: CorrelationMatrix,
}

impl CorrelationResult {
    pub fn strongest(&self) -> Option<&CorrelationPair> {
        self.ranked.first()
    }

    pub fn top(&self, n: usize) -> Vec<CorrelationPair> {
        self.ranked.iter().take(n).cloned().collect()
    }
}

/// Pearson r over rows where both cells are present.
///
/// Returns `None` when fewer than `min_observations` rows overlap or either
/// column is constant over the overlap. Otherwise returns the coefficient
/// and the overlap size.
pub fn pearson(
    a: &[Option<f64>],
    b: &[Option<f64>],
    min_observations: usize,
) -> Option<(f64, usize)> {
    let pairs = || {
        a.iter()
            .zip(b)
            .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
    };

    let (first_x, first_y) = pairs().next()?;
    let (mut n, mut sum_x, mut sum_y) = (0usize, 0.0, 0.0);
    let (mut varies_x, mut varies_y) = (false, false);
    for (x, y) in pairs() {
        n += 1;
        sum_x += x;
        sum_y += y;
        varies_x |= x != first_x;
        varies_y |= y != first_y;
    }
    // Decided on the raw values: a constant column's float mean can differ
    // from its value and leave a tiny nonzero sum of squares.
    if n < min_observations.max(2) || !varies_x || !varies_y {
        return None;
    }
    let mean_x = sum_x / n as f64;
    let mean_y = sum_y / n as f64;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (x, y) in pairs() {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    Some((r.clamp(-1.0, 1.0), n))
}

/// Correlate every unordered pair of columns.
///
/// `columns` must be in dataset order; each pair names the earlier column
/// as `column_a`.
pub fn correlate(columns: &[NumericColumn<'_>], config: &CorrelationConfig) -> CorrelationResult {
    let size = columns.len();
    let mut values = vec![vec![None; size]; size];
    let mut ranked = Vec::new();

    for i in 0..size {
        for j in (i + 1)..size {
            let Some((coefficient, observations)) =
                pearson(columns[i].values, columns[j].values, config.min_observations)
            else {
                continue;
            };
            values[i][j] = Some(coefficient);
            values[j][i] = Some(coefficient);
            ranked.push(CorrelationPair {
                column_a: columns[i].name.to_string(),
                column_b: columns[j].name.to_string(),
                coefficient,
                strength: config.classify(coefficient),
                observations,
            });
        }
    }

    for (index, column) in columns.iter().enumerate() {
        if !is_constant_or_sparse(column.values, config.min_observations) {
            values[index][index] = Some(1.0);
        }
    }

    rank_pairs(&mut ranked);
    CorrelationResult {
        ranked,
        matrix: CorrelationMatrix {
            columns: columns.iter().map(|column| column.name.to_string()).collect(),
            values,
        },
    }
}

/// Sort by `|r|` descending, then by column names.
pub fn rank_pairs(pairs: &mut [CorrelationPair]) {
    pairs.sort_by(compare_pairs);
}

fn compare_pairs(a: &CorrelationPair, b: &CorrelationPair) -> Ordering {
    b.coefficient
        .abs()
        .total_cmp(&a.coefficient.abs())
        .then_with(|| a.column_a.cmp(&b.column_a))
        .then_with(|| a.column_b.cmp(&b.column_b))
}

fn is_constant_or_sparse(values: &[Option<f64>], min_observations: usize) -> bool {
    let mut present = values.iter().flatten();
    let Some(first) = present.next() else {
        return true;
    };
    let mut count = 1usize;
    let mut varies = false;
    for value in present {
        count += 1;
        varies |= value != first;
    }
    !varies || count < min_observations.max(2)
}
