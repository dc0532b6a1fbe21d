use std::io::Write;

use insight_ingest::{IngestError, LoadOptions, load_dataset_frame};
use polars::prelude::DataType;
use tempfile::{Builder, NamedTempFile};

fn temp_file(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn test_load_csv_infers_types() {
    let file = temp_file(".csv", b"age,city,score\n34,Oslo,1.5\n29,Lima,\n41,Oslo,3.25\n");
    let df = load_dataset_frame(file.path(), &LoadOptions::default()).unwrap();

    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 3);
    assert_eq!(df.column("age").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("city").unwrap().dtype(), &DataType::String);
    assert_eq!(df.column("score").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("score").unwrap().null_count(), 1);
}

#[test]
fn test_load_tsv_uses_tab_separator() {
    let file = temp_file(".tsv", b"a\tb\n1\tx\n2\ty\n");
    let df = load_dataset_frame(file.path(), &LoadOptions::default()).unwrap();

    assert_eq!(df.width(), 2);
    assert_eq!(df.column("a").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("b").unwrap().dtype(), &DataType::String);
}

#[test]
fn test_header_only_file_has_no_rows() {
    let file = temp_file(".csv", b"a,b\n");
    let df = load_dataset_frame(file.path(), &LoadOptions::default()).unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn test_missing_file() {
    let result = load_dataset_frame(
        std::path::Path::new("/nonexistent/data.csv"),
        &LoadOptions::default(),
    );
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn test_excel_is_rejected_before_reading() {
    let file = temp_file(".xlsx", b"PK\x03\x04");
    let result = load_dataset_frame(file.path(), &LoadOptions::default());
    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn test_utf16_is_rejected() {
    let file = temp_file(".csv", &[0xFF, 0xFE, b'a', 0, b',', 0]);
    let result = load_dataset_frame(file.path(), &LoadOptions::default());
    assert!(matches!(result, Err(IngestError::UnsupportedEncoding { .. })));
}

#[test]
fn test_size_limit() {
    let file = temp_file(".csv", b"a\n1\n2\n3\n");
    let options = LoadOptions {
        max_file_size: 4,
        ..LoadOptions::default()
    };
    let result = load_dataset_frame(file.path(), &options);
    assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
}
