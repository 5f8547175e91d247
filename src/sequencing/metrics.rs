//! Route metrics and improvement versus the naive baseline ordering.

use serde::{Deserialize, Serialize};

use crate::models::{SequencedRoute, Stop};

use super::builder::SequenceBuilder;

/// Assumed fuel economy in kilometers per liter.
pub const FUEL_KM_PER_LITER: f64 = 10.0;

/// Assumed fuel price in dollars per liter.
pub const FUEL_COST_PER_LITER: f64 = 1.5;

fn fuel_cost(distance_km: f64) -> f64 {
    distance_km / FUEL_KM_PER_LITER * FUEL_COST_PER_LITER
}

/// Aggregate figures for a sequenced route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Total route distance in kilometers.
    pub total_distance_km: f64,
    /// Hours between the first and last estimated arrival.
    pub total_duration_hours: f64,
    /// Number of sequenced stops.
    pub stop_count: usize,
    /// Estimated fuel cost in dollars.
    pub fuel_cost: f64,
}

impl RouteMetrics {
    /// Computes metrics for a sequenced route.
    pub fn for_route(route: &SequencedRoute) -> Self {
        let total_duration_hours = match (route.first_arrival(), route.last_arrival()) {
            (Some(first), Some(last)) => (last - first).num_seconds() as f64 / 3600.0,
            _ => 0.0,
        };
        Self {
            total_distance_km: route.total_distance_km(),
            total_duration_hours,
            stop_count: route.len(),
            fuel_cost: fuel_cost(route.total_distance_km()),
        }
    }
}

/// Distance and cost saved versus visiting the input stops in their
/// original, unsequenced order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// Distance of the naive input-order route.
    pub baseline_distance_km: f64,
    /// Kilometers saved by the optimized ordering (negative if worse).
    pub distance_saved_km: f64,
    /// Percentage improvement over the baseline.
    pub percent: f64,
    /// Estimated fuel-cost saving in dollars.
    pub cost_saving: f64,
}

impl Improvement {
    /// Compares an optimized route against the naive baseline built from
    /// the same stops, departure time, and timing model.
    ///
    /// Stops the optimizer dropped for capacity are excluded from the
    /// baseline too, so both orderings cover the same deliveries.
    pub fn versus_baseline(route: &SequencedRoute, stops: &[Stop]) -> Self {
        let builder = SequenceBuilder::new(stops);
        let dropped = route.unsequenced();
        let order: Vec<usize> = (0..stops.len())
            .filter(|&i| !dropped.iter().any(|id| id == stops[i].shipment_id()))
            .collect();
        let baseline = builder.build(&order, route.departure(), &[]);

        let baseline_distance_km = baseline.total_distance_km();
        let distance_saved_km = baseline_distance_km - route.total_distance_km();
        let percent = if baseline_distance_km > 0.0 {
            distance_saved_km / baseline_distance_km * 100.0
        } else {
            0.0
        };
        Self {
            baseline_distance_km,
            distance_saved_km,
            percent,
            cost_saving: fuel_cost(distance_saved_km),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConstraintModel;
    use crate::sequencing::nearest_neighbor;
    use chrono::{DateTime, TimeZone, Utc};

    fn departure() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_metrics_empty_route() {
        let route = SequencedRoute::new(departure());
        let metrics = RouteMetrics::for_route(&route);
        assert_eq!(metrics.stop_count, 0);
        assert_eq!(metrics.total_distance_km, 0.0);
        assert_eq!(metrics.total_duration_hours, 0.0);
        assert_eq!(metrics.fuel_cost, 0.0);
    }

    #[test]
    fn test_fuel_cost_rate() {
        let mut route = SequencedRoute::new(departure());
        route.push_stop("A", departure(), 0.0);
        route.push_stop("B", departure() + chrono::Duration::hours(2), 100.0);
        let metrics = RouteMetrics::for_route(&route);
        // 100 km / 10 km-per-liter * 1.5 $/liter = $15
        assert!((metrics.fuel_cost - 15.0).abs() < 1e-10);
        assert!((metrics.total_duration_hours - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_improvement_on_shuffled_line() {
        // Input order zig-zags along a line; optimization should save
        // distance over the baseline.
        let stops = vec![
            Stop::new("A", 47.00, -122.0, 1.0, 0.1),
            Stop::new("B", 47.04, -122.0, 1.0, 0.1),
            Stop::new("C", 47.01, -122.0, 1.0, 0.1),
            Stop::new("D", 47.03, -122.0, 1.0, 0.1),
        ];
        let route = nearest_neighbor(&stops, &ConstraintModel::new(), departure());
        let improvement = Improvement::versus_baseline(&route, &stops);
        assert!(improvement.distance_saved_km > 0.0);
        assert!(improvement.percent > 0.0);
        assert!(improvement.cost_saving > 0.0);
        assert!(improvement.baseline_distance_km > route.total_distance_km());
    }

    #[test]
    fn test_truncated_route_baseline_covers_same_stops() {
        // Capacity drops C; the baseline must not include it, or the
        // saving would be overstated against a longer tour.
        let stops = vec![
            Stop::new("A", 47.00, -122.0, 40.0, 0.1),
            Stop::new("B", 47.01, -122.0, 40.0, 0.1),
            Stop::new("C", 47.02, -122.0, 40.0, 0.1),
        ];
        let constraints = ConstraintModel::new()
            .with_vehicle(crate::models::VehicleConstraint::new(100.0, 10.0));
        let route = nearest_neighbor(&stops, &constraints, departure());
        assert_eq!(route.unsequenced(), &["C".to_string()]);

        let improvement = Improvement::versus_baseline(&route, &stops);
        // Input order over {A, B} equals the sequenced route exactly.
        assert!((improvement.baseline_distance_km - route.total_distance_km()).abs() < 1e-9);
        assert!(improvement.distance_saved_km.abs() < 1e-9);
    }

    #[test]
    fn test_improvement_zero_for_already_ordered_input() {
        let stops = vec![
            Stop::new("A", 47.00, -122.0, 1.0, 0.1),
            Stop::new("B", 47.01, -122.0, 1.0, 0.1),
            Stop::new("C", 47.02, -122.0, 1.0, 0.1),
        ];
        let route = nearest_neighbor(&stops, &ConstraintModel::new(), departure());
        let improvement = Improvement::versus_baseline(&route, &stops);
        assert!(improvement.distance_saved_km.abs() < 1e-9);
        assert!(improvement.percent.abs() < 1e-9);
    }
}
