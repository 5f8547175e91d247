//! Stop sequencing: ordering a set of delivery stops into an efficient
//! single-vehicle route.
//!
//! - [`SequencingStrategy`] — strategy selection per call
//! - [`SequenceBuilder`] — shared distance/timing evaluation
//! - [`nearest_neighbor`] — greedy nearest-neighbor, O(n²)
//! - [`genetic`] — genetic search with order crossover and elitism
//! - [`time_window`] — window-sorted nearest-neighbor
//! - [`balanced`] — k-means clustering + per-cluster nearest-neighbor
//! - [`validate`] — post-hoc constraint checks
//! - [`RouteMetrics`] / [`Improvement`] — route aggregates and baseline comparison

mod builder;
mod clustering;
mod genetic;
mod metrics;
mod nearest_neighbor;
mod strategy;
mod time_window;
mod validator;

pub use builder::{SequenceBuilder, AVERAGE_SPEED_KMH, NEUTRAL_DISTANCE_KM, SERVICE_TIME_MINUTES};
pub use clustering::{balanced, cluster_stops, CLUSTER_COUNT, KMEANS_ITERATIONS};
pub use genetic::{genetic, GeneticConfig};
pub use metrics::{Improvement, RouteMetrics, FUEL_COST_PER_LITER, FUEL_KM_PER_LITER};
pub use nearest_neighbor::nearest_neighbor;
pub use strategy::{SequencingOptions, SequencingStrategy};
pub use time_window::time_window;
pub use validator::validate;
