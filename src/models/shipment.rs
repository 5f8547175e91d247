//! Shipment record consumed by the capacity and rebalancing components.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    /// Registered but not yet picked up.
    Pending,
    /// Waiting at a hub for its next leg.
    AtHub,
    /// Moving between hubs.
    InTransit,
    /// On a delivery vehicle.
    OutForDelivery,
    /// Delivered to the recipient.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl ShipmentStatus {
    /// Returns `true` for statuses that no longer occupy hub capacity.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered | ShipmentStatus::Cancelled)
    }
}

/// A shipment moving through the hub network.
///
/// Read-only from the engine's perspective; the engine never mutates
/// shipment state.
///
/// # Examples
///
/// ```
/// use freight_routing::models::{Shipment, ShipmentStatus};
///
/// let s = Shipment::new("SHP-1", "SEA", "LAX", 12.5)
///     .with_status(ShipmentStatus::InTransit)
///     .with_current_hub("PDX");
/// assert_eq!(s.current_hub(), Some("PDX"));
/// assert!(!s.status().is_terminal());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    id: String,
    origin_hub: String,
    destination_hub: String,
    current_hub: Option<String>,
    status: ShipmentStatus,
    weight_kg: f64,
    volume_cbm: f64,
    service_level: String,
    expected_delivery: Option<DateTime<Utc>>,
}

impl Shipment {
    /// Creates a pending shipment with no current hub and "standard" service.
    pub fn new(
        id: impl Into<String>,
        origin_hub: impl Into<String>,
        destination_hub: impl Into<String>,
        weight_kg: f64,
    ) -> Self {
        Self {
            id: id.into(),
            origin_hub: origin_hub.into(),
            destination_hub: destination_hub.into(),
            current_hub: None,
            status: ShipmentStatus::Pending,
            weight_kg,
            volume_cbm: 0.0,
            service_level: "standard".to_string(),
            expected_delivery: None,
        }
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: ShipmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the hub where the shipment currently sits.
    pub fn with_current_hub(mut self, hub: impl Into<String>) -> Self {
        self.current_hub = Some(hub.into());
        self
    }

    /// Sets the volume in cubic meters.
    pub fn with_volume_cbm(mut self, volume: f64) -> Self {
        self.volume_cbm = volume;
        self
    }

    /// Sets the service level.
    pub fn with_service_level(mut self, level: impl Into<String>) -> Self {
        self.service_level = level.into();
        self
    }

    /// Sets the expected delivery deadline.
    pub fn with_expected_delivery(mut self, when: DateTime<Utc>) -> Self {
        self.expected_delivery = Some(when);
        self
    }

    /// Shipment identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Hub where the shipment entered the network.
    pub fn origin_hub(&self) -> &str {
        &self.origin_hub
    }

    /// Final destination hub.
    pub fn destination_hub(&self) -> &str {
        &self.destination_hub
    }

    /// Hub where the shipment currently sits, if known.
    pub fn current_hub(&self) -> Option<&str> {
        self.current_hub.as_deref()
    }

    /// Lifecycle status.
    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Volume in cubic meters.
    pub fn volume_cbm(&self) -> f64 {
        self.volume_cbm
    }

    /// Service level the shipment was booked at.
    pub fn service_level(&self) -> &str {
        &self.service_level
    }

    /// Expected delivery deadline, if one was promised.
    pub fn expected_delivery(&self) -> Option<DateTime<Utc>> {
        self.expected_delivery
    }

    /// Returns `true` if the shipment sits at the given hub in a
    /// non-terminal status.
    pub fn occupies_hub(&self, hub_id: &str) -> bool {
        !self.status.is_terminal() && self.current_hub.as_deref() == Some(hub_id)
    }
}
