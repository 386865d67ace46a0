//! Error types for Fleet Forecast loading paths.
//!
//! Projection failures are NOT errors: they are typed domain results owned by
//! the engine (see `ff-core`). This type covers what can go wrong when a
//! dataset is read and decoded.

use thiserror::Error;

/// Result type alias for Fleet Forecast loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for dataset loading and decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// A record violates the ingestion contract (e.g. negative odometer).
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Stable numeric code for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidDataset(_) => 10,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
