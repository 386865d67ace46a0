//! Fleet Forecast common types and errors.
//!
//! This crate provides the foundational types shared across the workspace:
//! - Vehicle identity
//! - The `Observation` data model handed over by the ingestion collaborator
//! - Category normalization and keyword matching
//! - Schema versioning for the JSON interchange formats
//! - The unified error type for loading and parsing

pub mod category;
pub mod error;
pub mod id;
pub mod observation;
pub mod schema;

pub use category::{keyword_match, normalize_category};
pub use error::{Error, Result};
pub use id::VehicleId;
pub use observation::Observation;
pub use schema::SCHEMA_VERSION;
