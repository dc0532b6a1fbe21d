//! Loading of delimited text files for analysis.
//!
//! Parsing is polars' job; this crate picks the separator, guards file size
//! and encoding, and maps failures onto [`IngestError`].

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{LoadOptions, MAX_FILE_SIZE, load_dataset_frame, separator_for};
