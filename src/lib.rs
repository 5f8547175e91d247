//! # freight-routing
//!
//! Freight routing and optimization library covering hub-to-hub network
//! routing and last-mile stop sequencing.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Hub, Leg, Shipment, Stop, constraints, results)
//! - [`geo`] — Haversine distance and time-of-day travel factors
//! - [`network`] — Routing graph, shortest path, route assembly, caching, capacity, rebalancing
//! - [`sequencing`] — Stop sequencing heuristics, constraint validation, route metrics
//! - [`engine`] — Facade tying both tiers together

pub mod engine;
pub mod geo;
pub mod models;
pub mod network;
pub mod sequencing;
