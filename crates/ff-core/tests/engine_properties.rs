//! Property tests for the projection engine's contract.

use chrono::NaiveDate;
use ff_common::{Observation, VehicleId};
use ff_core::{project, ProjectionFailure};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn observation(day_offset: u32, odometer: f64) -> Observation {
    Observation::new(
        VehicleId::parse("C-100").unwrap(),
        base_date() + chrono::Days::new(u64::from(day_offset)),
        odometer,
        "Llantas",
    )
}

/// Arbitrary histories: 0..20 readings within a decade, odometers in a
/// realistic fleet range.
fn history_strategy() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec((0u32..3650, 0.0f64..1_000_000.0), 0..20)
        .prop_map(|raw| raw.into_iter().map(|(d, o)| observation(d, o)).collect())
}

proptest! {
    #[test]
    fn never_panics_and_is_idempotent(history in history_strategy(), interval in 1.0f64..100_000.0) {
        let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let a = project(&history, interval, today);
        let b = project(&history, interval, today);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn short_histories_are_always_insufficient(
        history in prop::collection::vec((0u32..3650, 0.0f64..1_000_000.0), 0..2),
        interval in 1.0f64..100_000.0,
    ) {
        let history: Vec<Observation> =
            history.into_iter().map(|(d, o)| observation(d, o)).collect();
        let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let have = history.len();
        prop_assert_eq!(
            project(&history, interval, today),
            Err(ProjectionFailure::InsufficientData { have })
        );
    }

    #[test]
    fn successful_projections_anchor_to_the_latest_reading(
        history in history_strategy(),
        interval in 1.0f64..100_000.0,
    ) {
        let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        if let Ok(p) = project(&history, interval, today) {
            let last = history.iter().max_by_key(|o| o.date).unwrap();
            prop_assert_eq!(p.target_odometer, last.odometer + interval);
        }
    }

    #[test]
    fn increasing_histories_always_project(
        start in 0.0f64..100_000.0,
        rate in 1.0f64..500.0,
        n in 2usize..15,
        interval in 1.0f64..50_000.0,
    ) {
        let history: Vec<Observation> = (0..n)
            .map(|i| observation(i as u32 * 7, start + rate * 7.0 * i as f64))
            .collect();
        let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let p = project(&history, interval, today);
        prop_assert!(p.is_ok(), "strictly increasing history failed: {:?}", p);
        let p = p.unwrap();
        // Large day ordinals cost a few digits of precision in the sums.
        prop_assert!((p.rate_per_day - rate).abs() < 0.01);
    }
}
