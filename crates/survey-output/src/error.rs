//! Error types for record output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing normalized records.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output file could not be created.
    #[error("failed to create output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the sink failed.
    #[error("failed to write to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("failed to serialize record: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// The sink was written to after `finish`.
    #[error("sink {target} is already finished")]
    Finished { target: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
