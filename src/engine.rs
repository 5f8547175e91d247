//! Engine facade tying the network and sequencing tiers together.
//!
//! [`RoutingEngine`] owns the hub and leg catalogs plus a route cache, and
//! exposes one entry point per operation: hub-to-hub routing, capacity
//! snapshots, load rebalancing, and stop sequencing.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    ConstraintModel, EngineError, Hub, Leg, RouteOutcome, SequenceViolation, SequencedRoute,
    Shipment, Stop,
};
use crate::network::{
    capacity_snapshot, HubCapacitySnapshot, InMemoryRouteCache, LoadRebalancer, RebalanceReport,
    RouteAssembler, RouteCache, RouteCacheKey, RouteOptions,
};
use crate::sequencing::{validate, Improvement, RouteMetrics, SequencingOptions};

/// Output of a sequencing run: the route plus its evaluation.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// The sequenced route.
    pub route: SequencedRoute,
    /// Aggregate figures for the route.
    pub metrics: RouteMetrics,
    /// Constraint violations found in the sequenced route.
    pub violations: Vec<SequenceViolation>,
    /// Saving versus visiting the stops in input order.
    pub improvement: Improvement,
}

/// Facade over the routing network and stop sequencing.
///
/// # Examples
///
/// ```
/// use freight_routing::engine::RoutingEngine;
/// use freight_routing::models::{Hub, Leg};
/// use freight_routing::network::RouteOptions;
///
/// let hubs = vec![Hub::new("SEA", "Seattle"), Hub::new("PDX", "Portland")];
/// let legs = vec![Leg::new("SEA", "PDX", "standard", 280.0, 4.0, 120.0)];
/// let engine = RoutingEngine::new(hubs, legs);
///
/// let outcome = engine
///     .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new())
///     .unwrap();
/// assert!(outcome.is_route());
/// ```
pub struct RoutingEngine<C: RouteCache = InMemoryRouteCache> {
    hubs: HashMap<String, Hub>,
    legs: Vec<Leg>,
    cache: C,
}

impl RoutingEngine<InMemoryRouteCache> {
    /// Creates an engine with the default in-memory route cache.
    pub fn new(hubs: Vec<Hub>, legs: Vec<Leg>) -> Self {
        Self::with_cache(hubs, legs, InMemoryRouteCache::new())
    }
}

impl<C: RouteCache> RoutingEngine<C> {
    /// Creates an engine with a caller-supplied cache.
    pub fn with_cache(hubs: Vec<Hub>, legs: Vec<Leg>, cache: C) -> Self {
        let hubs = hubs.into_iter().map(|h| (h.id().to_string(), h)).collect();
        Self { hubs, legs, cache }
    }

    /// Known hubs, keyed by id.
    pub fn hubs(&self) -> &HashMap<String, Hub> {
        &self.hubs
    }

    /// The leg catalog.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    fn check_hub(&self, hub_id: &str) -> Result<&Hub, EngineError> {
        self.hubs
            .get(hub_id)
            .ok_or_else(|| EngineError::UnknownHub(hub_id.to_string()))
    }

    /// Finds the best route between two hubs.
    ///
    /// Cached results are served unless the options request real-time
    /// routing, which recomputes but still refreshes the cache.
    pub fn find_optimal_route(
        &self,
        origin: &str,
        destination: &str,
        service_level: &str,
        options: &RouteOptions,
    ) -> Result<RouteOutcome, EngineError> {
        self.check_hub(origin)?;
        self.check_hub(destination)?;

        let key = RouteCacheKey::new(origin, destination, service_level);
        if !options.is_real_time() {
            if let Some(cached) = self.cache.get(&key) {
                return Ok(RouteOutcome::Route(cached));
            }
        }

        let assembler = RouteAssembler::new(&self.legs);
        let outcome = assembler.find_route(origin, destination, service_level, options);
        if let Some(route) = outcome.route() {
            self.cache.put(key, route.clone());
        } else {
            debug!(origin, destination, service_level, "no route found");
        }
        Ok(outcome)
    }

    /// Reports current load and status for a hub.
    pub fn hub_capacity(
        &self,
        hub_id: &str,
        shipments: &[Shipment],
    ) -> Result<HubCapacitySnapshot, EngineError> {
        let hub = self.check_hub(hub_id)?;
        Ok(capacity_snapshot(hub, shipments))
    }

    /// Suggests reroutes that move load off critically loaded hubs.
    pub fn rebalance_hub_loads(
        &self,
        hub_ids: &[String],
        shipments: &[Shipment],
    ) -> Result<RebalanceReport, EngineError> {
        LoadRebalancer::new(&self.hubs, &self.legs).rebalance(hub_ids, shipments)
    }

    /// Sequences delivery stops and evaluates the result.
    pub fn optimize_route(
        &self,
        stops: &[Stop],
        constraints: &ConstraintModel,
        options: &SequencingOptions,
    ) -> OptimizationResult {
        let departure = options.departure();
        let route = options.strategy().sequence(stops, constraints, departure);
        debug!(
            stops = stops.len(),
            sequenced = route.len(),
            distance_km = route.total_distance_km(),
            "stops sequenced"
        );
        let metrics = RouteMetrics::for_route(&route);
        let violations = validate(&route, constraints);
        let improvement = Improvement::versus_baseline(&route, stops);
        OptimizationResult {
            route,
            metrics,
            violations,
            improvement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleConstraint;
    use crate::network::NullRouteCache;
    use crate::sequencing::SequencingStrategy;
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    fn hubs() -> Vec<Hub> {
        vec![
            Hub::new("SEA", "Seattle"),
            Hub::new("PDX", "Portland"),
            Hub::new("SFO", "San Francisco"),
        ]
    }

    fn legs() -> Vec<Leg> {
        vec![
            Leg::new("SEA", "PDX", "standard", 280.0, 4.0, 120.0),
            Leg::new("PDX", "SFO", "standard", 1010.0, 14.0, 420.0),
        ]
    }

    #[test]
    fn test_unknown_hub_is_an_error() {
        let engine = RoutingEngine::new(hubs(), legs());
        let err = engine
            .find_optimal_route("SEA", "LAX", "standard", &RouteOptions::new())
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownHub("LAX".into()));
    }

    #[test]
    fn test_multi_hop_route_totals() {
        let engine = RoutingEngine::new(hubs(), legs());
        let outcome = engine
            .find_optimal_route("SEA", "SFO", "standard", &RouteOptions::new())
            .unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.hop_count(), 2);
        assert!((route.total_distance_km() - 1290.0).abs() < 1e-9);
        assert!((route.total_transit_hours() - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_route_for_unknown_service_level() {
        let engine = RoutingEngine::new(hubs(), legs());
        let outcome = engine
            .find_optimal_route("SEA", "SFO", "express", &RouteOptions::new())
            .unwrap();
        assert!(!outcome.is_route());
    }

    #[test]
    fn test_cached_route_survives_leg_removal() {
        // A cache hit returns the stored route even if the catalog no
        // longer contains the leg.
        let engine = RoutingEngine::new(hubs(), legs());
        let first = engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new())
            .unwrap();
        assert!(first.is_route());

        let engine = RoutingEngine {
            legs: Vec::new(),
            ..engine
        };
        let second = engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new())
            .unwrap();
        assert!(second.is_route());
    }

    #[test]
    fn test_expired_cache_entry_recomputes() {
        let cache = InMemoryRouteCache::with_ttl(Duration::ZERO);
        let engine = RoutingEngine::with_cache(hubs(), legs(), cache);
        engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new())
            .unwrap();

        let engine = RoutingEngine {
            legs: Vec::new(),
            ..engine
        };
        let outcome = engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new())
            .unwrap();
        assert!(!outcome.is_route());
    }

    #[test]
    fn test_real_time_bypasses_cache_read() {
        let engine = RoutingEngine::new(hubs(), legs());
        engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new())
            .unwrap();

        let engine = RoutingEngine {
            legs: Vec::new(),
            ..engine
        };
        let outcome = engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new().real_time())
            .unwrap();
        assert!(!outcome.is_route());
    }

    #[test]
    fn test_real_time_result_written_back() {
        // A real-time query skips the cache read but refreshes the entry,
        // so later non-real-time calls are served from it.
        let engine = RoutingEngine::new(hubs(), legs());
        let first = engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new().real_time())
            .unwrap();
        assert!(first.is_route());

        let engine = RoutingEngine {
            legs: Vec::new(),
            ..engine
        };
        let cached = engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new())
            .unwrap();
        assert!(cached.is_route());
    }

    #[test]
    fn test_null_cache_always_recomputes() {
        let engine = RoutingEngine::with_cache(hubs(), legs(), NullRouteCache);
        let outcome = engine
            .find_optimal_route("SEA", "PDX", "standard", &RouteOptions::new())
            .unwrap();
        assert!(outcome.is_route());
    }

    #[test]
    fn test_hub_capacity_snapshot() {
        let engine = RoutingEngine::new(hubs(), legs());
        let shipments = vec![
            Shipment::new("SHP-1", "SEA", "SFO", 100.0).with_current_hub("SEA"),
            Shipment::new("SHP-2", "SEA", "PDX", 50.0).with_current_hub("PDX"),
        ];
        let snapshot = engine.hub_capacity("SEA", &shipments).unwrap();
        assert_eq!(snapshot.current_shipment_count, 1);
    }

    #[test]
    fn test_optimize_route_reports_evaluation() {
        let engine = RoutingEngine::new(hubs(), legs());
        let stops = vec![
            Stop::new("A", 47.60, -122.33, 10.0, 1.0),
            Stop::new("B", 47.70, -122.33, 10.0, 1.0),
            Stop::new("C", 47.62, -122.33, 10.0, 1.0),
        ];
        let options = SequencingOptions::new()
            .with_strategy(SequencingStrategy::NearestNeighbor)
            .with_departure(Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap());
        let result = engine.optimize_route(&stops, &ConstraintModel::new(), &options);
        assert_eq!(result.route.len(), 3);
        assert_eq!(result.metrics.stop_count, 3);
        assert!(result.violations.is_empty());
        assert!(result.improvement.distance_saved_km >= 0.0);
    }

    #[test]
    fn test_optimize_route_surfaces_violations() {
        let engine = RoutingEngine::new(hubs(), legs());
        let stops = vec![
            Stop::new("A", 47.60, -122.33, 10.0, 1.0),
            Stop::new("B", 48.60, -122.33, 10.0, 1.0),
        ];
        let constraints = ConstraintModel::new()
            .with_vehicle(VehicleConstraint::new(500.0, 20.0).with_max_distance_km(1.0));
        let options = SequencingOptions::new()
            .with_departure(Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap());
        let result = engine.optimize_route(&stops, &constraints, &options);
        assert!(!result.violations.is_empty());
    }
}
