//! Stateless forecast queries.
//!
//! The collaborator-facing entry point: one call per user interaction, all
//! selection state carried in the request parameters. Nothing here is
//! cached or remembered between calls; UI selection lives in the caller's
//! view-model, not in the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ff_common::VehicleId;
use ff_config::IntervalTable;

use crate::project::{project, Projection, ProjectionFailure};
use crate::store::RecordStore;
use crate::urgency::{classify_urgency, Urgency};

/// Everything the presentation layer needs to render one query's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub vehicle_id: VehicleId,
    /// Category as queried (free text, not normalized).
    pub category: String,
    /// Interval resolved for the category, in km.
    pub interval_km: f64,
    /// Table key the interval came from; `None` when the default was used.
    pub matched_key: Option<String>,
    /// How many observations fed the trend fit.
    pub observations_used: usize,
    /// The projection, or the typed reason none was possible.
    pub projection: Result<Projection, ProjectionFailure>,
    /// Urgency of the projected date; `None` when there is no projection.
    pub urgency: Option<Urgency>,
}

/// Run one maintenance forecast query.
///
/// Filters the store to the (vehicle, category) subset, resolves the
/// maintenance interval, projects the threshold-crossing date, and derives
/// the urgency label against `today`.
pub fn forecast(
    store: &RecordStore,
    vehicle: &VehicleId,
    category: &str,
    intervals: &IntervalTable,
    today: NaiveDate,
) -> Forecast {
    let resolved = intervals.resolve(category);
    let observations = store.observations_matching(vehicle, category);
    let projection = project(&observations, resolved.interval_km, today);
    let urgency = projection
        .as_ref()
        .ok()
        .map(|p| classify_urgency(p.next_date, today));

    Forecast {
        vehicle_id: vehicle.clone(),
        category: category.to_string(),
        interval_km: resolved.interval_km,
        matched_key: resolved.matched_key,
        observations_used: observations.len(),
        projection,
        urgency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_common::Observation;

    fn fixture_store() -> RecordStore {
        let vid = VehicleId::parse("C-001").unwrap();
        RecordStore::from_observations(vec![
            Observation::new(
                vid.clone(),
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                10_000.0,
                "Llantas",
            ),
            Observation::new(
                vid.clone(),
                NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
                12_000.0,
                "Llantas",
            ),
            Observation::new(
                vid,
                NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
                11_000.0,
                "Batería",
            ),
        ])
        .unwrap()
    }

    fn fixture_table() -> IntervalTable {
        IntervalTable::parse_json(
            r#"{
                "schema_version": "1.0.0",
                "default_interval_km": 5000.0,
                "intervals": { "llantas": 4000.0 }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn successful_query_carries_projection_and_urgency() {
        let store = fixture_store();
        let table = fixture_table();
        let vid = VehicleId::parse("C-001").unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();

        let f = forecast(&store, &vid, "Llantas", &table, today);
        assert_eq!(f.interval_km, 4000.0);
        assert_eq!(f.matched_key.as_deref(), Some("llantas"));
        assert_eq!(f.observations_used, 2);
        let p = f.projection.as_ref().unwrap();
        assert_eq!(p.target_odometer, 16_000.0);
        assert_eq!(f.urgency, Some(Urgency::Nominal));
    }

    #[test]
    fn sparse_category_reports_insufficient_data() {
        let store = fixture_store();
        let table = fixture_table();
        let vid = VehicleId::parse("C-001").unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();

        let f = forecast(&store, &vid, "Batería", &table, today);
        assert_eq!(f.interval_km, 5000.0); // default: no "batería" entry here
        assert!(f.matched_key.is_none());
        assert_eq!(
            f.projection,
            Err(ProjectionFailure::InsufficientData { have: 1 })
        );
        assert!(f.urgency.is_none());
    }

    #[test]
    fn query_is_idempotent() {
        let store = fixture_store();
        let table = fixture_table();
        let vid = VehicleId::parse("C-001").unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();

        let a = forecast(&store, &vid, "Llantas", &table, today);
        let b = forecast(&store, &vid, "Llantas", &table, today);
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_vehicle_reports_insufficient_data() {
        let store = fixture_store();
        let table = fixture_table();
        let vid = VehicleId::parse("C-404").unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();

        let f = forecast(&store, &vid, "Llantas", &table, today);
        assert_eq!(f.observations_used, 0);
        assert_eq!(
            f.projection,
            Err(ProjectionFailure::InsufficientData { have: 0 })
        );
    }
}
