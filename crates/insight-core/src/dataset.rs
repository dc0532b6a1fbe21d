//! Read-only view of the tabular input.

use polars::prelude::{Column, DataFrame, DataType};

use crate::error::Result;

/// A table of named columns sharing one row count.
///
/// Backed by a polars `DataFrame`, which rejects columns of unequal length.
/// Each column's `DataType` is its type tag; the engine never mutates it.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
}

impl Dataset {
    pub fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// Build a dataset from columns.
    ///
    /// # Errors
    ///
    /// Fails when column lengths differ or names repeat.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        Ok(Self::new(DataFrame::new(columns)?))
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn row_count(&self) -> usize {
        self.frame.height()
    }

    pub fn column_count(&self) -> usize {
        self.frame.width()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.frame.get_columns().iter()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.frame.column(name).ok()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns()
            .map(|column| column.name().to_string())
            .collect()
    }

    pub fn dtype_of(&self, name: &str) -> Option<&DataType> {
        self.column(name).map(Column::dtype)
    }
}

impl From<DataFrame> for Dataset {
    fn from(frame: DataFrame) -> Self {
        Self::new(frame)
    }
}
