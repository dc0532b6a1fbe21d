//! Cell extraction from polars columns.
//!
//! Missing-value rules live here and nowhere else: a null cell is missing,
//! a non-finite float is missing, and a text cell that is empty after
//! trimming is missing.

use polars::prelude::{Column, DataType, PolarsResult};

/// Cells of a numeric column in row order, `None` where missing.
pub fn numeric_values(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let series = column.as_materialized_series().cast(&DataType::Float64)?;
    let values = series
        .f64()?
        .into_iter()
        .map(|value| value.filter(|v| v.is_finite()))
        .collect();
    Ok(values)
}

/// Cells of a categorical column in row order, trimmed, `None` where missing.
///
/// Boolean cells become `"true"` / `"false"`.
pub fn categorical_values(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let series = column.as_materialized_series();
    if matches!(series.dtype(), DataType::Boolean) {
        let values = series
            .bool()?
            .into_iter()
            .map(|value| value.map(|flag| flag.to_string()))
            .collect();
        return Ok(values);
    }
    let text = series.cast(&DataType::String)?;
    let values = text
        .str()?
        .into_iter()
        .map(|value| value.and_then(normalize_text))
        .collect();
    Ok(values)
}

/// Trimmed text, or `None` for blank cells.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn missing_count<T>(values: &[Option<T>]) -> usize {
    values.iter().filter(|value| value.is_none()).count()
}

/// Present values only, in row order.
pub fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}
