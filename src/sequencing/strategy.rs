//! Strategy selection for stop sequencing.
//!
//! [`SequencingStrategy`] names each supported heuristic, and
//! [`SequencingOptions`] bundles a strategy with a departure time into the
//! single options value the engine accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ConstraintModel, SequencedRoute, Stop};

use super::clustering::balanced;
use super::genetic::{genetic, GeneticConfig};
use super::nearest_neighbor::nearest_neighbor;
use super::time_window::time_window;

/// A stop-sequencing heuristic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SequencingStrategy {
    /// Greedy nearest-neighbor construction. Fast, reasonable quality.
    #[default]
    NearestNeighbor,
    /// Genetic algorithm with order crossover. Slower, better orderings
    /// on larger routes.
    Genetic(GeneticConfig),
    /// Sort by delivery-window start, then nearest-neighbor within the
    /// sorted order's capacity limits.
    TimeWindow,
    /// Cluster stops geographically, then sequence each cluster.
    Balanced,
}

impl SequencingStrategy {
    /// Sequences `stops` with this strategy.
    pub fn sequence(
        &self,
        stops: &[Stop],
        constraints: &ConstraintModel,
        departure: DateTime<Utc>,
    ) -> SequencedRoute {
        match self {
            Self::NearestNeighbor => nearest_neighbor(stops, constraints, departure),
            Self::Genetic(config) => genetic(stops, departure, config),
            Self::TimeWindow => time_window(stops, constraints, departure),
            Self::Balanced => balanced(stops, constraints, departure),
        }
    }
}

/// Options for a sequencing run.
///
/// # Examples
///
/// ```
/// use freight_routing::sequencing::{SequencingOptions, SequencingStrategy};
///
/// let options = SequencingOptions::new()
///     .with_strategy(SequencingStrategy::TimeWindow);
/// assert_eq!(options.strategy(), &SequencingStrategy::TimeWindow);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequencingOptions {
    strategy: SequencingStrategy,
    departure: Option<DateTime<Utc>>,
}

impl SequencingOptions {
    /// Default options: nearest-neighbor, departing now.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sequencing strategy.
    pub fn with_strategy(mut self, strategy: SequencingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets an explicit departure time. Without one, the run departs at
    /// the current time.
    pub fn with_departure(mut self, departure: DateTime<Utc>) -> Self {
        self.departure = Some(departure);
        self
    }

    /// The selected sequencing strategy.
    pub fn strategy(&self) -> &SequencingStrategy {
        &self.strategy
    }

    /// The configured departure, or the current time.
    pub fn departure(&self) -> DateTime<Utc> {
        self.departure.unwrap_or_else(Utc::now)
    }
}
