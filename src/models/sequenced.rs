//! Sequenced delivery route types produced by the sequencing tier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single stop within a sequenced route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencedStop {
    /// Shipment delivered at this stop.
    pub shipment_id: String,
    /// 1-based position in the route.
    pub sequence: usize,
    /// Estimated arrival time.
    pub estimated_arrival: DateTime<Utc>,
    /// Distance from the previous stop in kilometers (0 for the first stop).
    pub distance_from_previous_km: f64,
}

/// An ordered delivery route for a single vehicle.
///
/// Produced fresh per optimization call and terminal once returned. Stops
/// that could not be sequenced (capacity early-stop) are listed in
/// [`unsequenced`](SequencedRoute::unsequenced) so callers can re-invoke
/// for the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencedRoute {
    stops: Vec<SequencedStop>,
    departure: DateTime<Utc>,
    total_distance_km: f64,
    unsequenced: Vec<String>,
}

impl SequencedRoute {
    /// Creates an empty route departing at the given time.
    pub fn new(departure: DateTime<Utc>) -> Self {
        Self {
            stops: Vec::new(),
            departure,
            total_distance_km: 0.0,
            unsequenced: Vec::new(),
        }
    }

    /// Appends a stop, assigning its sequence number and accumulating
    /// distance.
    pub fn push_stop(
        &mut self,
        shipment_id: impl Into<String>,
        estimated_arrival: DateTime<Utc>,
        distance_from_previous_km: f64,
    ) {
        self.total_distance_km += distance_from_previous_km;
        let sequence = self.stops.len() + 1;
        self.stops.push(SequencedStop {
            shipment_id: shipment_id.into(),
            sequence,
            estimated_arrival,
            distance_from_previous_km,
        });
    }

    /// Records a stop that was dropped by the capacity early-stop.
    pub fn add_unsequenced(&mut self, shipment_id: impl Into<String>) {
        self.unsequenced.push(shipment_id.into());
    }

    /// The ordered stops.
    pub fn stops(&self) -> &[SequencedStop] {
        &self.stops
    }

    /// Number of sequenced stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if no stop was sequenced.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Departure time the route was planned from.
    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    /// Total route distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Shipments dropped because vehicle capacity was exhausted.
    pub fn unsequenced(&self) -> &[String] {
        &self.unsequenced
    }

    /// Shipment IDs in visit order.
    pub fn shipment_ids(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.shipment_id.as_str()).collect()
    }

    /// Estimated arrival at the first stop.
    pub fn first_arrival(&self) -> Option<DateTime<Utc>> {
        self.stops.first().map(|s| s.estimated_arrival)
    }

    /// Estimated arrival at the last stop.
    pub fn last_arrival(&self) -> Option<DateTime<Utc>> {
        self.stops.last().map(|s| s.estimated_arrival)
    }
}
