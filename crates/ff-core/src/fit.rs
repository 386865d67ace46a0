//! Ordinary least-squares trend fitting for odometer series.
//!
//! Deliberately the simplest model that works on sparse fleet logs:
//! unweighted OLS of odometer over day ordinal, closed form, no outlier
//! rejection, no recency weighting. Tests verify the fit against hand
//! calculations rather than any library's internals.

use serde::{Deserialize, Serialize};

/// Fitted linear trend: `odometer ≈ rate_per_day * day_ordinal + offset`.
///
/// Returned alongside every successful projection so the presentation layer
/// can draw the fitted-line overlay without recomputing the regression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    /// Slope in km per day.
    pub rate_per_day: f64,
    /// Intercept in km at day ordinal zero.
    pub offset: f64,
    /// R² of the fit (1.0 for a perfectly linear series).
    pub r_squared: f64,
}

impl TrendFit {
    /// Fitted odometer value at a given day ordinal.
    pub fn predict(&self, day_ordinal: f64) -> f64 {
        self.rate_per_day * day_ordinal + self.offset
    }
}

/// Compute the OLS fit over `(day_ordinal, odometer)` pairs.
///
/// Returns `None` when the fit is underdetermined: fewer than two points, or
/// zero variance on the time axis (all readings on the same day).
pub fn linear_regression(points: &[(f64, f64)]) -> Option<TrendFit> {
    let n = points.len() as f64;
    if points.len() < 2 {
        return None;
    }

    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
    let sum_x2: f64 = points.iter().map(|(x, _)| x * x).sum();
    let sum_y2: f64 = points.iter().map(|(_, y)| y * y).sum();

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom.abs() < 1e-9 {
        return None;
    }

    let rate_per_day = (n * sum_xy - sum_x * sum_y) / denom;
    let offset = (sum_y - rate_per_day * sum_x) / n;

    let mean_y = sum_y / n;
    let ss_tot = sum_y2 - n * mean_y * mean_y;
    let ss_res: f64 = points
        .iter()
        .map(|(x, y)| {
            let predicted = rate_per_day * x + offset;
            (y - predicted).powi(2)
        })
        .sum();

    let r_squared = if ss_tot > 1e-15 {
        1.0 - ss_res / ss_tot
    } else {
        // Zero variance in y: a flat series is a perfect flat fit.
        1.0
    };

    Some(TrendFit {
        rate_per_day,
        offset,
        r_squared,
    })
}
