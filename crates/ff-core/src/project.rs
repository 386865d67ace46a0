//! Maintenance date projection.
//!
//! Given a vehicle's filtered observation history and a resolved maintenance
//! interval, fits the odometer trend and solves for the calendar date at
//! which cumulative distance crosses the next threshold. Every degenerate
//! regime maps to a typed failure; the caller never sees a panic or a raw
//! arithmetic fault.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ff_common::Observation;

use crate::fit::{linear_regression, TrendFit};

/// Why a projection could not be produced. All variants are recoverable;
/// the presentation layer translates each into a user-facing notice.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionFailure {
    /// Fewer than two usable observations: a trend line is underdetermined
    /// by a single point. Also raised when all readings share one date.
    #[error("insufficient data for a trend fit ({have} usable observation(s))")]
    InsufficientData { have: usize },

    /// The fitted rate is flat or decreasing. The fit itself is well
    /// defined, but a vehicle that accumulates no distance has no
    /// distance-based maintenance signal.
    #[error("odometer trend is not increasing ({rate_per_day:.3} km/day)")]
    NonPositiveTrend { rate_per_day: f64 },

    /// The projected crossing time is non-finite or falls outside the
    /// representable calendar range.
    #[error("projected date is outside the representable calendar range")]
    DateOverflow,
}

/// A successful maintenance projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Date at which the odometer trend crosses the maintenance threshold.
    pub next_date: NaiveDate,
    /// Threshold odometer value: latest actual reading plus the interval.
    pub target_odometer: f64,
    /// Fitted odometer growth in km per day.
    pub rate_per_day: f64,
    /// Days from the reference date to `next_date` (negative when overdue).
    pub days_until: i64,
    /// Full fit parameters for the chart overlay.
    pub fit: TrendFit,
}

/// Project the next maintenance date for one component's history.
///
/// Pure function: no logging, no mutation, idempotent for identical inputs
/// and the same reference date.
pub fn project(
    observations: &[Observation],
    interval_km: f64,
    today: NaiveDate,
) -> Result<Projection, ProjectionFailure> {
    if observations.len() < 2 {
        return Err(ProjectionFailure::InsufficientData {
            have: observations.len(),
        });
    }

    let points: Vec<(f64, f64)> = observations
        .iter()
        .map(|o| (o.day_ordinal(), o.odometer))
        .collect();

    let fit = linear_regression(&points).ok_or(ProjectionFailure::InsufficientData {
        have: observations.len(),
    })?;

    if fit.rate_per_day <= 0.0 {
        return Err(ProjectionFailure::NonPositiveTrend {
            rate_per_day: fit.rate_per_day,
        });
    }

    // Anchor the target to the latest actual reading, not the fitted value
    // at that date: the baseline is ground truth, the fit is only the rate.
    // max_by_key returns the last maximum, preserving input order for ties.
    let last = observations.iter().max_by_key(|o| o.date).unwrap();
    let target_odometer = last.odometer + interval_km;

    let target_ordinal = (target_odometer - fit.offset) / fit.rate_per_day;
    let next_date = date_from_ordinal(target_ordinal).ok_or(ProjectionFailure::DateOverflow)?;
    let days_until = next_date.signed_duration_since(today).num_days();

    Ok(Projection {
        next_date,
        target_odometer,
        rate_per_day: fit.rate_per_day,
        days_until,
        fit,
    })
}

/// Convert a fractional day ordinal back to a calendar date.
///
/// `None` for non-finite values and anything the calendar cannot represent.
fn date_from_ordinal(ordinal: f64) -> Option<NaiveDate> {
    if !ordinal.is_finite() {
        return None;
    }
    let days = ordinal.round();
    if days < f64::from(i32::MIN) || days > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(days as i32)
}
