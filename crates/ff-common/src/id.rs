//! Vehicle identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle identifier as entered in the fleet log (e.g. "C-001").
///
/// Guaranteed non-empty: construct through [`VehicleId::parse`], which trims
/// surrounding whitespace and rejects blank input. Deserialization goes
/// through the same validation, so a blank id cannot enter via JSON either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct VehicleId(String);

impl VehicleId {
    /// Parse and validate a vehicle identifier string.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(VehicleId(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VehicleId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        VehicleId::parse(&s).ok_or_else(|| format!("vehicle id must be non-empty, got {s:?}"))
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
