//! Route result types produced by the network tier.

use serde::{Deserialize, Serialize};

use super::TransportMode;

/// Whether a route is a single direct leg or a multi-hop itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteType {
    /// One leg, origin to destination.
    Direct,
    /// Two or more legs chained through intermediate hubs.
    MultiHop,
}

/// One leg of an assembled itinerary, with the cost resolved for the
/// query's load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Origin hub id.
    pub origin: String,
    /// Destination hub id.
    pub destination: String,
    /// Leg distance in kilometers.
    pub distance_km: f64,
    /// Schedule-adjusted transit time in hours.
    pub transit_hours: f64,
    /// Cost for the queried weight and volume.
    pub cost: f64,
    /// Transport mode of the underlying leg.
    pub mode: TransportMode,
}

/// A complete route between two hubs.
///
/// Immutable once produced; cached copies are never mutated by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    route_type: RouteType,
    legs: Vec<RouteLeg>,
    total_distance_km: f64,
    total_transit_hours: f64,
    total_cost: f64,
}

impl RouteResult {
    /// Assembles a result from itinerary legs, computing the totals.
    pub fn from_legs(route_type: RouteType, legs: Vec<RouteLeg>) -> Self {
        let total_distance_km = legs.iter().map(|l| l.distance_km).sum();
        let total_transit_hours = legs.iter().map(|l| l.transit_hours).sum();
        let total_cost = legs.iter().map(|l| l.cost).sum();
        Self {
            route_type,
            legs,
            total_distance_km,
            total_transit_hours,
            total_cost,
        }
    }

    /// Direct or multi-hop.
    pub fn route_type(&self) -> RouteType {
        self.route_type
    }

    /// The ordered itinerary legs.
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Number of legs in the itinerary.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }

    /// Total distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Total transit time in hours.
    pub fn total_transit_hours(&self) -> f64 {
        self.total_transit_hours
    }

    /// Total cost for the queried load.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

/// Outcome of a route query.
///
/// A missing route is a normal business outcome of a disconnected network,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RouteOutcome {
    /// A route was found.
    Route(RouteResult),
    /// No route exists between the hubs.
    NoRoute {
        /// Why the query produced no route.
        reason: String,
    },
}

impl RouteOutcome {
    /// Creates a `NoRoute` outcome with the given reason.
    pub fn no_route(reason: impl Into<String>) -> Self {
        RouteOutcome::NoRoute {
            reason: reason.into(),
        }
    }

    /// Returns the route, if one was found.
    pub fn route(&self) -> Option<&RouteResult> {
        match self {
            RouteOutcome::Route(r) => Some(r),
            RouteOutcome::NoRoute { .. } => None,
        }
    }

    /// Returns `true` if a route was found.
    pub fn is_route(&self) -> bool {
        matches!(self, RouteOutcome::Route(_))
    }
}
