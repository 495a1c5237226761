//! Error types shared by both pipelines

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

/// Everything that can abort a pipeline run. Nothing is retried.
#[derive(Error, Debug)]
pub enum TableError {
    /// Input file does not exist
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not valid delimited text
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A transaction month has no inflation entry
    #[error("no inflation rate found for month {month:?} (row {row})")]
    MissingKey { month: String, row: usize },

    /// Positional access past the end of a row
    #[error("column {column} out of range for row {row} with {len} fields")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        len: usize,
    },

    /// Output could not be written
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
