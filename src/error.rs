//! Error types
//!
//! Store, archive, and ingestion errors, plus the crate-boundary `ApiError` that the
//! session and the driver binary surface.

use thiserror::Error;

/// Errors raised by the ordered file store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Index {index} out of range for store of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while opening or reading an archive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    #[error("Failed to open archive: {0}")]
    Open(String),

    #[error("Failed to read archive entry {index}: {reason}")]
    Entry { index: usize, reason: String },

    #[error("Failed to read entry content for {path}: {reason}")]
    Read { path: String, reason: String },
}

/// Errors raised by the ingestion pipeline
///
/// Only `Busy` and `Source` escape an ingestion invocation; `Read` and `Decode` are
/// recovered per item and turned into placeholder content.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("An ingestion is already in progress")]
    Busy,

    #[error("Failed to enumerate uploads: {0}")]
    Source(String),

    #[error("Failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {name} as text")]
    Decode { name: String },

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Crate-boundary error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
