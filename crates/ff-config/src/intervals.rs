//! Interval table types and the category resolution policy.
//!
//! The table maps normalized category keywords to maintenance distance
//! intervals. It is static process-wide configuration: loaded (or embedded)
//! once, validated fail-fast, then shared read-only across queries.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ff_common::{keyword_match, normalize_category, schema};

use crate::validate::ValidationError;

/// Category-to-interval configuration table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalTable {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Fallback interval (km) when no table entry matches a category.
    pub default_interval_km: f64,

    /// Normalized category keyword -> maintenance interval in km.
    /// BTreeMap keeps fallback resolution order deterministic (sorted keys).
    #[serde(default)]
    pub intervals: BTreeMap<String, f64>,
}

/// Outcome of resolving a category against the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInterval {
    /// The interval to use, in km.
    pub interval_km: f64,
    /// The table key that matched, or `None` when the default was used.
    pub matched_key: Option<String>,
}

impl IntervalTable {
    /// Load an interval table from a JSON file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::Io(format!("{}: {}", path.display(), e)))?;
        Self::parse_json(&content)
    }

    /// Parse and validate an interval table from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, ValidationError> {
        let table: Self =
            serde_json::from_str(json).map_err(|e| ValidationError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// Semantic validation, applied at load time.
    ///
    /// Intervals must be strictly positive and finite, and keys must already
    /// be in normalized form so lookups cannot silently miss them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !schema::is_compatible(&self.schema_version) {
            return Err(ValidationError::IncompatibleSchema(
                self.schema_version.clone(),
            ));
        }
        if !(self.default_interval_km.is_finite() && self.default_interval_km > 0.0) {
            return Err(ValidationError::NonPositiveDefault(self.default_interval_km));
        }
        for (key, value) in &self.intervals {
            if key.is_empty() || *key != normalize_category(key) {
                return Err(ValidationError::MalformedKey(key.clone()));
            }
            if !(value.is_finite() && *value > 0.0) {
                return Err(ValidationError::NonPositiveInterval {
                    key: key.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }

    /// Resolve a free-text category to a maintenance interval.
    ///
    /// Two-tier policy: exact match of the normalized category against a
    /// table key first; otherwise the first key (in sorted order) that is
    /// contained in the category or contains it; otherwise the default.
    pub fn resolve(&self, category: &str) -> ResolvedInterval {
        let normalized = normalize_category(category);

        if let Some(interval) = self.intervals.get(&normalized) {
            return ResolvedInterval {
                interval_km: *interval,
                matched_key: Some(normalized),
            };
        }

        for (key, interval) in &self.intervals {
            if keyword_match(key, &normalized) {
                tracing::debug!(category, key = %key, "interval resolved by keyword containment");
                return ResolvedInterval {
                    interval_km: *interval,
                    matched_key: Some(key.clone()),
                };
            }
        }

        tracing::debug!(category, "no interval entry matched; using default");
        ResolvedInterval {
            interval_km: self.default_interval_km,
            matched_key: None,
        }
    }
}

/// Embedded default interval table for out-of-the-box use.
const DEFAULT_INTERVALS_JSON: &str = include_str!("schemas/intervals.default.json");

impl Default for IntervalTable {
    fn default() -> Self {
        // The embedded JSON is validated by the tests below; a failure here
        // is a build defect, not a runtime condition.
        Self::parse_json(DEFAULT_INTERVALS_JSON).expect("embedded default interval table is invalid")
    }
}
