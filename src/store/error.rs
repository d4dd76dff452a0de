use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse category of a [`DataLoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLoadErrorKind {
    NotFound,
    SchemaMismatch,
    ParseFailure,
}

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Data file not found: '{0}'")]
    NotFound(PathBuf),

    #[error("Missing required columns {missing:?} (found {found:?})")]
    SchemaMismatch {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("Failed to parse data file '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Invalid value '{value}' in column '{column}' on line {line} of '{path}'")]
    InvalidRow {
        path: PathBuf,
        line: usize,
        column: String,
        value: String,
    },

    #[error("Failed to read data file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl DataLoadError {
    pub fn kind(&self) -> DataLoadErrorKind {
        match self {
            DataLoadError::NotFound(_) => DataLoadErrorKind::NotFound,
            DataLoadError::SchemaMismatch { .. } => DataLoadErrorKind::SchemaMismatch,
            DataLoadError::Parse { .. }
            | DataLoadError::InvalidRow { .. }
            | DataLoadError::Io(..)
            | DataLoadError::TaskJoin(_) => DataLoadErrorKind::ParseFailure,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Load(#[from] DataLoadError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Unexpected null in column '{column}' at row {row}")]
    UnexpectedNull { column: String, row: usize },
}
