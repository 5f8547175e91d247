//! Network-level routing: hub graph, shortest-path search, route assembly,
//! caching, and hub capacity management.
//!
//! - [`RoutingGraph`] — directed weighted graph built from active scheduled legs
//! - [`shortest_path`] — binary-heap Dijkstra with selectable edge weight
//! - [`RouteAssembler`] — direct-first route assembly with multi-hop fallback
//! - [`RouteCache`] / [`InMemoryRouteCache`] — injectable TTL result cache
//! - [`capacity_snapshot`] — hub utilization and status classification
//! - [`LoadRebalancer`] — reroute suggestions away from overloaded hubs

mod assembler;
mod cache;
mod capacity;
mod dijkstra;
mod graph;
mod rebalance;

pub use assembler::{RouteAssembler, RouteOptions};
pub use cache::{InMemoryRouteCache, NullRouteCache, RouteCache, RouteCacheKey};
pub use capacity::{capacity_snapshot, CapacityStatus, HubCapacitySnapshot};
pub use dijkstra::{shortest_path, OptimizeFor};
pub use graph::RoutingGraph;
pub use rebalance::{LoadRebalancer, RebalanceReport, RerouteSuggestion};
