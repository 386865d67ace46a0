//! Per-vehicle record store.
//!
//! Holds the chronologically ordered observation history for each vehicle
//! and answers the two lookups the projection engine depends on: all records
//! for a vehicle, and the ordered subset matching a component category.
//! Read-only after construction; re-derived from the uploaded dataset each
//! session, never persisted.

use std::collections::BTreeMap;
use std::io::Read;

use ff_common::{keyword_match, normalize_category, Error, Observation, Result, VehicleId};

/// Indexed, chronologically sorted observation store.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    by_vehicle: BTreeMap<VehicleId, Vec<Observation>>,
}

impl RecordStore {
    /// Build a store from the validated record set handed over by the
    /// ingestion collaborator.
    ///
    /// The source does not guarantee chronological order, so each vehicle's
    /// history is stably sorted by date (ties keep input order). Records
    /// that violate the ingestion contract are rejected outright.
    pub fn from_observations(observations: Vec<Observation>) -> Result<Self> {
        let mut by_vehicle: BTreeMap<VehicleId, Vec<Observation>> = BTreeMap::new();

        for observation in observations {
            if !observation.odometer.is_finite() || observation.odometer < 0.0 {
                return Err(Error::InvalidDataset(format!(
                    "odometer {} for vehicle {} is negative or non-finite",
                    observation.odometer, observation.vehicle_id
                )));
            }
            by_vehicle
                .entry(observation.vehicle_id.clone())
                .or_default()
                .push(observation);
        }

        for history in by_vehicle.values_mut() {
            history.sort_by_key(|o| o.date);
        }

        tracing::debug!(vehicles = by_vehicle.len(), "record store loaded");
        Ok(Self { by_vehicle })
    }

    /// Load a store from a JSON array of observations.
    pub fn from_json(json: &str) -> Result<Self> {
        let observations: Vec<Observation> = serde_json::from_str(json)?;
        Self::from_observations(observations)
    }

    /// Load a store from a reader producing a JSON array of observations.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let observations: Vec<Observation> = serde_json::from_reader(reader)?;
        Self::from_observations(observations)
    }

    /// Vehicle identifiers present in the store, in sorted order.
    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleId> {
        self.by_vehicle.keys()
    }

    /// Number of vehicles in the store.
    pub fn len(&self) -> usize {
        self.by_vehicle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_vehicle.is_empty()
    }

    /// Full observation history for a vehicle, ordered by date ascending.
    /// Unknown vehicles yield an empty slice.
    pub fn observations_for(&self, vehicle: &VehicleId) -> &[Observation] {
        self.by_vehicle
            .get(vehicle)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ordered subset of a vehicle's history matching a category.
    ///
    /// Same two-tier policy as interval resolution: exact normalized match
    /// first; only when no record matches exactly, a containment pass picks
    /// up free-text variants ("ServicioC" against "Servicio").
    pub fn observations_matching(&self, vehicle: &VehicleId, category: &str) -> Vec<Observation> {
        let wanted = normalize_category(category);
        let history = self.observations_for(vehicle);

        let exact: Vec<Observation> = history
            .iter()
            .filter(|o| normalize_category(&o.category) == wanted)
            .cloned()
            .collect();
        if !exact.is_empty() || wanted.is_empty() {
            return exact;
        }

        history
            .iter()
            .filter(|o| keyword_match(&normalize_category(&o.category), &wanted))
            .cloned()
            .collect()
    }
}
