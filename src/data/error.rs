use std::path::PathBuf;

/// Failures while reading the launch table at startup. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}, column '{column}': {reason}")]
    Malformed {
        row: usize,
        column: &'static str,
        reason: String,
    },

    #[error("the launch table has no rows")]
    Empty,
}

impl LoadError {
    pub(crate) fn malformed(row: usize, column: &'static str, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            row,
            column,
            reason: reason.into(),
        }
    }
}
