//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is larger than the configured limit.
    #[error("file {path} is {size} bytes, above the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Extension is not a delimited text format.
    #[error("unsupported file format '{extension}' for {path}; expected .csv, .tsv or .tab")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("unsupported encoding {encoding} in {path}; only UTF-8 is read")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Polars could not parse the file.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
