//! Urgency classification for projected maintenance dates.
//!
//! Presentation-facing derived value: a pure function of the projected date
//! and the current date. Recomputed on every query and never cached, since
//! "today" changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How soon the projected maintenance date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Less than 7 days away, or already overdue.
    Urgent,
    /// Less than 30 days away.
    PlanSoon,
    /// 30 days or more away.
    Nominal,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Urgent => write!(f, "urgent"),
            Urgency::PlanSoon => write!(f, "plan_soon"),
            Urgency::Nominal => write!(f, "nominal"),
        }
    }
}

/// Classify a projected maintenance date against a reference date.
pub fn classify_urgency(next_date: NaiveDate, today: NaiveDate) -> Urgency {
    let days_until = next_date.signed_duration_since(today).num_days();
    if days_until < 7 {
        Urgency::Urgent
    } else if days_until < 30 {
        Urgency::PlanSoon
    } else {
        Urgency::Nominal
    }
}
