//! Domain model types for the routing and optimization engine.
//!
//! Provides the core abstractions: hubs with configured capacity, scheduled
//! legs between hubs, shipments moving through the network, delivery stops
//! with time windows, route results, sequenced routes, and the constraint
//! and violation types shared by the sequencing tier.

mod constraint;
mod error;
mod hub;
mod leg;
mod route;
mod sequenced;
mod shipment;
mod stop;

pub use constraint::{ConstraintModel, DriverConstraint, SequenceViolation, VehicleConstraint};
pub use error::EngineError;
pub use hub::{Hub, DEFAULT_MAX_SHIPMENTS, DEFAULT_MAX_WEIGHT_KG};
pub use leg::{Leg, TransportMode};
pub use route::{RouteLeg, RouteOutcome, RouteResult, RouteType};
pub use sequenced::{SequencedRoute, SequencedStop};
pub use shipment::{Shipment, ShipmentStatus};
pub use stop::{Stop, TimeWindow};
