//! Error types for the statistics engine and the recipe converter.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::formats::DbFormat;

/// Errors raised while reading numbers or computing statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A token before the sentinel was not a base-10 integer.
    #[error("Invalid input on line {line}: {token:?}")]
    InvalidToken {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A statistic was requested over zero collected values.
    #[error("Cannot compute {statistic} of an empty input")]
    EmptyInput { statistic: &'static str },

    #[error("Failed to read input")]
    Io(#[from] std::io::Error),
}

/// Errors raised while converting a recipe database.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source document is not a well-formed database.
    #[error("Failed to parse {format} database: {message}")]
    Parse { format: DbFormat, message: String },

    #[error("Failed to write {format} database: {message}")]
    Serialize { format: DbFormat, message: String },
}
