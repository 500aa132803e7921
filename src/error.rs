//! Error types for the roshambo crate

use thiserror::Error;

/// Main error type for the roshambo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unrecognized throw '{input}' (expected R, P, or S)")]
    ParseMove { input: String },

    #[error("unknown opponent '{input}'. Expected one of: {expected}")]
    ParseOpponent { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("stored matrix has {got} rows, expected {expected}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} of stored matrix has {got} entries, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unparsable probability '{value}' at row {row}, column {column}")]
    ParseCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("probability {value} at row {row}, column {column} must be non-negative and finite")]
    CellOutOfRange {
        row: usize,
        column: usize,
        value: f64,
    },

    #[error("row {row} sums to {sum}, expected 1.0")]
    RowSum { row: usize, sum: f64 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
