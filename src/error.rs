//! Error type shared by loading, export and the search loop

use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("folder not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: PolarsError,
    },

    /// Header resolved but the column could not be read as text
    #[error("column '{column}' missing or not text in {file}")]
    MissingColumn { file: String, column: String },

    #[error("{file}, row {row}: invalid {field} value '{value}'")]
    InvalidNumber {
        file: String,
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("{file}, row {row}: weight is zero")]
    ZeroWeight { file: String, row: usize },

    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

impl PriceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PriceError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PriceError>;
