use thiserror::Error;

/// Top-level error type for core operations.
///
/// Index construction itself is total and never fails; only the edges of the
/// crate (CSV decoding, JSON serialization, file reads) produce errors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("csv ingestion error: {0}")]
    Ingest(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
