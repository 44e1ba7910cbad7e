//! Error types for the csvq library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvq operations.
#[derive(Debug, Error)]
pub enum CsvqError {
    /// Path is missing or is not a regular file.
    #[error("{path} is not a valid file")]
    NotAFile { path: PathBuf },

    /// Error opening or reading a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error decoding CSV records.
    #[error("CSV error in '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Empty file or nothing to assemble.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// File has a header but no data row to sample types from.
    #[error("No data row to sample in '{path}'")]
    MissingSample { path: PathBuf },

    /// Two input files map to the same table name.
    #[error("cannot create table {table} twice (from '{path}')")]
    DuplicateTable { table: String, path: PathBuf },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CsvqError {
    /// Whether this error comes from an unusable input file.
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            CsvqError::NotAFile { .. } | CsvqError::Io { .. } | CsvqError::Read { .. }
        )
    }
}

/// Result type alias for csvq operations.
pub type Result<T> = std::result::Result<T, CsvqError>;
