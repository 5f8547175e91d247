//! Route assembly: direct legs first, multi-hop itineraries as fallback.

use tracing::debug;

use crate::models::{Leg, RouteLeg, RouteOutcome, RouteResult, RouteType};

use super::dijkstra::{shortest_path, OptimizeFor};
use super::graph::RoutingGraph;

/// Per-query routing options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteOptions {
    optimize_for: OptimizeFor,
    weight_kg: f64,
    volume_cbm: f64,
    real_time: bool,
    max_hops: Option<usize>,
}

impl RouteOptions {
    /// Creates the default options: optimize for cost, empty load, cached
    /// reads allowed, unbounded hop count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the edge weight to minimize.
    pub fn with_optimize_for(mut self, optimize_for: OptimizeFor) -> Self {
        self.optimize_for = optimize_for;
        self
    }

    /// Sets the shipment weight used for leg pricing.
    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Sets the shipment volume used for leg pricing.
    pub fn with_volume_cbm(mut self, volume_cbm: f64) -> Self {
        self.volume_cbm = volume_cbm;
        self
    }

    /// Bypasses the cache read. The computed result is still written back.
    pub fn real_time(mut self) -> Self {
        self.real_time = true;
        self
    }

    /// Rejects assembled routes with more than `max` legs.
    pub fn with_max_hops(mut self, max: usize) -> Self {
        self.max_hops = Some(max);
        self
    }

    /// Selected edge weight.
    pub fn optimize_for(&self) -> OptimizeFor {
        self.optimize_for
    }

    /// Shipment weight for pricing.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Shipment volume for pricing.
    pub fn volume_cbm(&self) -> f64 {
        self.volume_cbm
    }

    /// `true` if the cache read is bypassed.
    pub fn is_real_time(&self) -> bool {
        self.real_time
    }

    /// Hop-count limit, if any.
    pub fn max_hops(&self) -> Option<usize> {
        self.max_hops
    }
}

/// Assembles routes between hubs from the scheduled leg set.
///
/// A direct leg always wins over a multi-hop path, regardless of cost.
///
/// # Examples
///
/// ```
/// use freight_routing::models::Leg;
/// use freight_routing::network::{RouteAssembler, RouteOptions};
///
/// let legs = vec![
///     Leg::new("A", "B", "standard", 100.0, 2.0, 50.0),
///     Leg::new("B", "C", "standard", 150.0, 3.0, 70.0),
/// ];
/// let assembler = RouteAssembler::new(&legs);
/// let outcome = assembler.find_route("A", "C", "standard", &RouteOptions::new());
/// let route = outcome.route().expect("two-hop route exists");
/// assert_eq!(route.hop_count(), 2);
/// ```
pub struct RouteAssembler<'a> {
    legs: &'a [Leg],
}

impl<'a> RouteAssembler<'a> {
    /// Creates an assembler over the given leg set.
    pub fn new(legs: &'a [Leg]) -> Self {
        Self { legs }
    }

    /// Finds a route from origin to destination for a service level.
    ///
    /// Tries a direct leg first; otherwise searches the network graph and
    /// converts the node path back into legs. A missing route is returned
    /// as [`RouteOutcome::NoRoute`], never as an error.
    pub fn find_route(
        &self,
        origin: &str,
        destination: &str,
        service_level: &str,
        options: &RouteOptions,
    ) -> RouteOutcome {
        if let Some(leg) = self.direct_leg(origin, destination, service_level) {
            debug!(origin, destination, "direct leg found");
            return RouteOutcome::Route(RouteResult::from_legs(
                RouteType::Direct,
                vec![self.route_leg(leg, options)],
            ));
        }

        let graph = RoutingGraph::build(self.legs, service_level);
        let path = shortest_path(
            &graph,
            self.legs,
            origin,
            destination,
            options.optimize_for(),
            options.weight_kg(),
            options.volume_cbm(),
        );

        if path.len() < 2 {
            return RouteOutcome::no_route(format!(
                "no {service_level} route from {origin} to {destination}"
            ));
        }

        let mut legs = Vec::with_capacity(path.len() - 1);
        for pair in path.windows(2) {
            let from = graph.hub_id(pair[0]);
            let to = graph.hub_id(pair[1]);
            // A broken pair invalidates the whole itinerary; never return
            // a partial multi-hop route.
            match self.direct_leg(from, to, service_level) {
                Some(leg) => legs.push(self.route_leg(leg, options)),
                None => {
                    return RouteOutcome::no_route(format!(
                        "no {service_level} leg from {from} to {to} on computed path"
                    ));
                }
            }
        }

        if let Some(max) = options.max_hops() {
            if legs.len() > max {
                return RouteOutcome::no_route(format!(
                    "route requires {} hops, exceeding the limit of {max}",
                    legs.len()
                ));
            }
        }

        RouteOutcome::Route(RouteResult::from_legs(RouteType::MultiHop, legs))
    }

    /// Highest-priority active leg directly connecting two hubs for a
    /// service level.
    pub fn direct_leg(&self, origin: &str, destination: &str, service_level: &str) -> Option<&Leg> {
        self.legs
            .iter()
            .filter(|leg| {
                leg.is_active()
                    && leg.origin() == origin
                    && leg.destination() == destination
                    && leg.service_level() == service_level
            })
            .max_by_key(|leg| leg.priority())
    }

    fn route_leg(&self, leg: &Leg, options: &RouteOptions) -> RouteLeg {
        RouteLeg {
            origin: leg.origin().to_string(),
            destination: leg.destination().to_string(),
            distance_km: leg.distance_km(),
            transit_hours: leg.effective_transit_hours(),
            cost: leg.cost(options.weight_kg(), options.volume_cbm()),
            mode: leg.mode(),
        }
    }
}
