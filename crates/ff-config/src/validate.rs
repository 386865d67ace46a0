//! Load-time validation for the interval table.
//!
//! A zero or negative interval would make the date projection divide toward
//! nonsense, so malformed configuration is rejected when the table is
//! loaded, never discovered at projection time.

use thiserror::Error;

/// Errors raised while loading or validating an interval table.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to read interval table: {0}")]
    Io(String),

    #[error("failed to parse interval table: {0}")]
    Parse(String),

    #[error("incompatible interval table schema version: {0}")]
    IncompatibleSchema(String),

    #[error("default interval must be positive and finite, got {0}")]
    NonPositiveDefault(f64),

    #[error("interval for \"{key}\" must be positive and finite, got {value}")]
    NonPositiveInterval { key: String, value: f64 },

    #[error("interval table key \"{0}\" must be non-empty, trimmed, and lowercase")]
    MalformedKey(String),
}
