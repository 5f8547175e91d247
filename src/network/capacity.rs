//! Hub capacity monitoring: utilization and status classification.

use serde::{Deserialize, Serialize};

use crate::models::{Hub, Shipment};

/// Load status of a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityStatus {
    /// Both utilization metrics at or below 75%.
    Normal,
    /// Either metric above 75%, neither above 90%.
    Warning,
    /// Either metric above 90%.
    Critical,
}

impl CapacityStatus {
    fn classify(shipment_utilization: f64, weight_utilization: f64) -> Self {
        if shipment_utilization > 90.0 || weight_utilization > 90.0 {
            CapacityStatus::Critical
        } else if shipment_utilization > 75.0 || weight_utilization > 75.0 {
            CapacityStatus::Warning
        } else {
            CapacityStatus::Normal
        }
    }
}

/// Point-in-time utilization of a hub. Recomputed on demand, never
/// persisted by this tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubCapacitySnapshot {
    /// Hub the snapshot describes.
    pub hub_id: String,
    /// Non-terminal shipments currently at the hub.
    pub current_shipment_count: u32,
    /// Configured or default shipment limit.
    pub max_shipments: u32,
    /// Total weight of those shipments in kilograms.
    pub current_weight_kg: f64,
    /// Configured or default weight limit.
    pub max_weight_kg: f64,
    /// Shipment count as a percentage of the limit.
    pub shipment_utilization: f64,
    /// Weight as a percentage of the limit.
    pub weight_utilization: f64,
    /// Shipment slots remaining.
    pub available_capacity: u32,
    /// Classified load status.
    pub status: CapacityStatus,
}

/// Computes the capacity snapshot for a hub from the current shipment set.
///
/// Counts shipments sitting at the hub in non-terminal status and sums
/// their weight, then classifies status: either utilization above 90% is
/// critical, above 75% is warning, otherwise normal.
///
/// # Examples
///
/// ```
/// use freight_routing::models::Hub;
/// use freight_routing::network::{capacity_snapshot, CapacityStatus};
///
/// let hub = Hub::new("SEA", "Seattle").with_max_shipments(100);
/// let snapshot = capacity_snapshot(&hub, &[]);
/// assert_eq!(snapshot.status, CapacityStatus::Normal);
/// assert_eq!(snapshot.available_capacity, 100);
/// ```
pub fn capacity_snapshot(hub: &Hub, shipments: &[Shipment]) -> HubCapacitySnapshot {
    let at_hub: Vec<&Shipment> = shipments
        .iter()
        .filter(|s| s.occupies_hub(hub.id()))
        .collect();

    let current_shipment_count = at_hub.len() as u32;
    let current_weight_kg: f64 = at_hub.iter().map(|s| s.weight_kg()).sum();

    let max_shipments = hub.max_shipments();
    let max_weight_kg = hub.max_weight_kg();

    let shipment_utilization = if max_shipments > 0 {
        current_shipment_count as f64 / max_shipments as f64 * 100.0
    } else {
        100.0
    };
    let weight_utilization = if max_weight_kg > 0.0 {
        current_weight_kg / max_weight_kg * 100.0
    } else {
        100.0
    };

    HubCapacitySnapshot {
        hub_id: hub.id().to_string(),
        current_shipment_count,
        max_shipments,
        current_weight_kg,
        max_weight_kg,
        shipment_utilization,
        weight_utilization,
        available_capacity: max_shipments.saturating_sub(current_shipment_count),
        status: CapacityStatus::classify(shipment_utilization, weight_utilization),
    }
}
