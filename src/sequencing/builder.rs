//! Shared distance and timing evaluation for sequencing strategies.

use chrono::{DateTime, Duration, Timelike, Utc};

use crate::geo::{traffic_factor, travel_hours};
use crate::models::{SequencedRoute, Stop};

/// Average delivery-vehicle speed in km/h.
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

/// Fixed service time per stop, in minutes.
pub const SERVICE_TIME_MINUTES: i64 = 5;

/// Fallback distance when neither endpoint has known coordinates and no
/// average is available yet.
pub const NEUTRAL_DISTANCE_KM: f64 = 10.0;

/// Evaluates stop orderings: pairwise distances, arrival timestamps, and
/// route totals.
///
/// A stop without coordinates degrades gracefully: its distance to any
/// other stop falls back to the running average of distances computed so
/// far (or [`NEUTRAL_DISTANCE_KM`] when nothing is known yet) instead of
/// failing the call.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use freight_routing::models::Stop;
/// use freight_routing::sequencing::SequenceBuilder;
///
/// let stops = vec![
///     Stop::new("A", 47.60, -122.33, 1.0, 0.1),
///     Stop::new("B", 47.61, -122.33, 1.0, 0.1),
/// ];
/// let builder = SequenceBuilder::new(&stops);
/// let departure = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
/// let route = builder.build(&[0, 1], departure, &[]);
/// assert_eq!(route.len(), 2);
/// ```
pub struct SequenceBuilder<'a> {
    stops: &'a [Stop],
}

impl<'a> SequenceBuilder<'a> {
    /// Creates a builder over the given stop set.
    pub fn new(stops: &'a [Stop]) -> Self {
        Self { stops }
    }

    /// The stop set this builder evaluates.
    pub fn stops(&self) -> &[Stop] {
        self.stops
    }

    /// Haversine distance between two stops, if both have coordinates.
    pub fn distance_between(&self, from: usize, to: usize) -> Option<f64> {
        let a = self.stops[from].position()?;
        let b = self.stops[to].position()?;
        Some(a.distance_km(b))
    }

    /// Builds a sequenced route by visiting stops in the given order.
    ///
    /// Each leg's travel time is the distance at [`AVERAGE_SPEED_KMH`]
    /// scaled by the time-of-day traffic factor at the moment of
    /// departure, followed by a fixed per-stop service time. Indices in
    /// `unsequenced` are recorded as dropped stops.
    pub fn build(
        &self,
        order: &[usize],
        departure: DateTime<Utc>,
        unsequenced: &[usize],
    ) -> SequencedRoute {
        let mut route = SequencedRoute::new(departure);
        let mut clock = departure;
        let mut previous: Option<usize> = None;
        let mut distance_sum = 0.0;
        let mut distance_count = 0u32;

        for &idx in order {
            let distance = match previous {
                None => 0.0,
                Some(prev) => match self.distance_between(prev, idx) {
                    Some(d) => {
                        distance_sum += d;
                        distance_count += 1;
                        d
                    }
                    None => neutral(distance_sum, distance_count),
                },
            };

            let factor = traffic_factor(clock.hour());
            let hours = travel_hours(distance, AVERAGE_SPEED_KMH, factor);
            let arrival = clock + Duration::seconds((hours * 3600.0).round() as i64);

            route.push_stop(self.stops[idx].shipment_id(), arrival, distance);

            clock = arrival + Duration::minutes(SERVICE_TIME_MINUTES);
            previous = Some(idx);
        }

        for &idx in unsequenced {
            route.add_unsequenced(self.stops[idx].shipment_id());
        }

        route
    }

    /// Total distance of visiting stops in the given order, with the
    /// neutral fallback applied to missing coordinates.
    pub fn order_distance(&self, order: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut sum = 0.0;
        let mut count = 0u32;
        for pair in order.windows(2) {
            let d = match self.distance_between(pair[0], pair[1]) {
                Some(d) => {
                    sum += d;
                    count += 1;
                    d
                }
                None => neutral(sum, count),
            };
            total += d;
        }
        total
    }
}

fn neutral(distance_sum: f64, distance_count: u32) -> f64 {
    if distance_count > 0 {
        distance_sum / distance_count as f64
    } else {
        NEUTRAL_DISTANCE_KM
    }
}
