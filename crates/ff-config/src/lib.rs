//! Fleet Forecast maintenance interval configuration.
//!
//! This crate provides:
//! - Typed Rust structs for the interval table JSON format
//! - Embedded defaults for out-of-the-box use
//! - Fail-fast semantic validation at load time
//! - The two-tier category-to-interval resolution policy

pub mod intervals;
pub mod validate;

pub use intervals::{IntervalTable, ResolvedInterval};
pub use validate::ValidationError;
