//! Error types for dataset generation and preview.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or reading back a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The output file could not be created or truncated.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be written.
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// Buffered records could not be flushed to the sink.
    #[error("failed to flush dataset: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },

    /// A file could not be opened or parsed for preview.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
