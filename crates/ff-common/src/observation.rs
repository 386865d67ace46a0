//! Odometer observation records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::id::VehicleId;

/// A single (vehicle, date, odometer, category) record.
///
/// Supplied by the ingestion collaborator after parsing and validation:
/// dates are already parsed, odometer values are numeric and non-negative,
/// category labels are trimmed. Odometer readings are monotonic
/// non-decreasing in principle but NOT guaranteed (entry errors happen);
/// the projection engine's trend-sign gate handles that regime.
///
/// Observations are immutable once loaded for a session. Duplicates are
/// tolerated; they merely add a repeated point to the trend fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub vehicle_id: VehicleId,
    /// Calendar date of the reading (no time component).
    pub date: NaiveDate,
    /// Odometer reading in kilometres.
    pub odometer: f64,
    /// Free-text component category label, e.g. "Llantas".
    pub category: String,
}

impl Observation {
    pub fn new(vehicle_id: VehicleId, date: NaiveDate, odometer: f64, category: &str) -> Self {
        Self {
            vehicle_id,
            date,
            odometer,
            category: category.to_string(),
        }
    }

    /// Day ordinal (days since CE) used as the regression time axis.
    pub fn day_ordinal(&self) -> f64 {
        f64::from(self.date.num_days_from_ce())
    }
}
