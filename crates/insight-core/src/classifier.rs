//! Column classification by declared type.

use polars::prelude::DataType;

use insight_model::{
    AnalysisWarning, ColumnClassification, ColumnKind, UnsupportedColumn, WarningKind,
};

use crate::dataset::Dataset;

/// Kind for a polars type tag. Observed values play no part.
pub fn classify_dtype(dtype: &DataType) -> ColumnKind {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => ColumnKind::Numeric,
        DataType::String | DataType::Boolean => ColumnKind::Categorical,
        _ => ColumnKind::Unsupported,
    }
}

/// Partition the dataset's columns; every unsupported column gets a warning.
pub fn classify_columns(dataset: &Dataset) -> (ColumnClassification, Vec<AnalysisWarning>) {
    let mut classification = ColumnClassification::default();
    let mut warnings = Vec::new();
    for column in dataset.columns() {
        let name = column.name().to_string();
        match classify_dtype(column.dtype()) {
            ColumnKind::Numeric => classification.numeric.push(name),
            ColumnKind::Categorical => classification.categorical.push(name),
            ColumnKind::Unsupported => {
                let data_type = column.dtype().to_string();
                warnings.push(AnalysisWarning::for_column(
                    WarningKind::MalformedColumn,
                    &name,
                    format!("column type {data_type} is not supported; column excluded"),
                ));
                classification
                    .unsupported
                    .push(UnsupportedColumn { name, data_type });
            }
        }
    }
    (classification, warnings)
}

/// Move a supported column to the unsupported list after its values could
/// not be read.
pub fn demote_column(
    classification: &mut ColumnClassification,
    name: &str,
    data_type: String,
) {
    classification.numeric.retain(|column| column != name);
    classification.categorical.retain(|column| column != name);
    classification.unsupported.push(UnsupportedColumn {
        name: name.to_string(),
        data_type,
    });
}

#[cfg(test)]
mod tests {
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    use super::*;

    #[test]
    fn numeric_with_few_distinct_values_stays_numeric() {
        assert_eq!(classify_dtype(&DataType::Int64), ColumnKind::Numeric);
        assert_eq!(classify_dtype(&DataType::UInt8), ColumnKind::Numeric);
        assert_eq!(classify_dtype(&DataType::Float32), ColumnKind::Numeric);
        assert_eq!(classify_dtype(&DataType::String), ColumnKind::Categorical);
        assert_eq!(classify_dtype(&DataType::Boolean), ColumnKind::Categorical);
        assert_eq!(classify_dtype(&DataType::Null), ColumnKind::Unsupported);
        assert_eq!(classify_dtype(&DataType::Binary), ColumnKind::Unsupported);
    }

    #[test]
    fn unsupported_columns_are_excluded_with_warning() {
        let dataset = Dataset::from_columns(vec![
            Series::new("flag".into(), &[1i32, 0, 1]).into_column(),
            Series::new("city".into(), &["a", "b", "c"]).into_column(),
            Series::full_null("blob".into(), 3, &DataType::Null).into_column(),
        ])
        .expect("dataset");

        let (classification, warnings) = classify_columns(&dataset);

        assert_eq!(classification.numeric, vec!["flag".to_string()]);
        assert_eq!(classification.categorical, vec!["city".to_string()]);
        assert_eq!(classification.unsupported.len(), 1);
        assert_eq!(classification.unsupported[0].name, "blob");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::MalformedColumn);
        assert_eq!(warnings[0].column.as_deref(), Some("blob"));
    }

    #[test]
    fn demoted_column_moves_to_unsupported() {
        let mut classification = ColumnClassification {
            numeric: vec!["a".to_string(), "b".to_string()],
            categorical: vec![],
            unsupported: vec![],
        };
        demote_column(&mut classification, "a", "f64".to_string());
        assert_eq!(classification.numeric, vec!["b".to_string()]);
        assert_eq!(classification.kind_of("a"), Some(ColumnKind::Unsupported));
    }
}
