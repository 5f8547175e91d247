//! Load rebalancing: reroute suggestions away from overloaded hubs.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{EngineError, Hub, RouteResult, Shipment, ShipmentStatus};

use super::assembler::{RouteAssembler, RouteOptions};
use super::capacity::{capacity_snapshot, CapacityStatus};

/// Shipment utilization below which a normal-status hub counts as
/// underutilized.
const UNDERUTILIZED_THRESHOLD: f64 = 50.0;

/// Maximum shipments considered per overloaded hub in one pass.
const MAX_SHIPMENTS_PER_HUB: usize = 10;

/// Maximum total transit time for a viable alternate route.
const MAX_REROUTE_TRANSIT_HOURS: f64 = 48.0;

/// A suggested reroute of one shipment through an underutilized hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerouteSuggestion {
    /// Shipment to move.
    pub shipment_id: String,
    /// Overloaded hub the shipment currently sits at.
    pub from_hub: String,
    /// Suggested alternate transfer hub.
    pub to_hub: String,
    /// Route from the alternate hub to the shipment's final destination.
    pub route: RouteResult,
}

/// Result of one rebalancing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceReport {
    /// Hubs classified critical.
    pub overloaded: Vec<String>,
    /// Normal hubs with shipment utilization below 50%.
    pub underutilized: Vec<String>,
    /// Suggested reroutes. The engine never applies them itself.
    pub suggestions: Vec<RerouteSuggestion>,
}

/// Finds alternate transfer hubs for shipments stuck at overloaded hubs.
///
/// Suggest-only: no shipment state is mutated. Least-urgent shipments are
/// moved first, deferring urgent shipments and freeing slack capacity.
pub struct LoadRebalancer<'a> {
    hubs: &'a HashMap<String, Hub>,
    legs: &'a [crate::models::Leg],
}

impl<'a> LoadRebalancer<'a> {
    /// Creates a rebalancer over the engine's hub and leg sets.
    pub fn new(hubs: &'a HashMap<String, Hub>, legs: &'a [crate::models::Leg]) -> Self {
        Self { hubs, legs }
    }

    /// Computes reroute suggestions for the given hubs.
    ///
    /// Per overloaded hub, up to 10 in-transit shipments are tried in
    /// least-urgent-first order (latest expected delivery first, missing
    /// deadlines least urgent of all); the first underutilized hub with a
    /// route to the shipment's destination under 48 hours wins.
    pub fn rebalance(
        &self,
        hub_ids: &[String],
        shipments: &[Shipment],
    ) -> Result<RebalanceReport, EngineError> {
        let mut overloaded = Vec::new();
        let mut underutilized = Vec::new();

        for hub_id in hub_ids {
            let hub = self
                .hubs
                .get(hub_id)
                .ok_or_else(|| EngineError::UnknownHub(hub_id.clone()))?;
            let snapshot = capacity_snapshot(hub, shipments);
            match snapshot.status {
                CapacityStatus::Critical => overloaded.push(hub_id.clone()),
                CapacityStatus::Normal
                    if snapshot.shipment_utilization < UNDERUTILIZED_THRESHOLD =>
                {
                    underutilized.push(hub_id.clone())
                }
                _ => {}
            }
        }

        let assembler = RouteAssembler::new(self.legs);
        let mut suggestions = Vec::new();

        for hub_id in &overloaded {
            for shipment in self.candidates(hub_id, shipments) {
                let found = underutilized.iter().find_map(|alternate| {
                    self.viable_route(&assembler, alternate, shipment)
                        .map(|route| (alternate.clone(), route))
                });
                if let Some((alternate, route)) = found {
                    debug!(
                        shipment = shipment.id(),
                        from = %hub_id,
                        to = %alternate,
                        "reroute suggested"
                    );
                    suggestions.push(RerouteSuggestion {
                        shipment_id: shipment.id().to_string(),
                        from_hub: hub_id.clone(),
                        to_hub: alternate,
                        route,
                    });
                }
            }
        }

        Ok(RebalanceReport {
            overloaded,
            underutilized,
            suggestions,
        })
    }

    /// In-transit shipments at a hub, least urgent first, capped at 10.
    fn candidates<'s>(&self, hub_id: &str, shipments: &'s [Shipment]) -> Vec<&'s Shipment> {
        let mut at_hub: Vec<&Shipment> = shipments
            .iter()
            .filter(|s| s.status() == ShipmentStatus::InTransit && s.occupies_hub(hub_id))
            .collect();

        // Latest expected delivery first; shipments without a deadline are
        // the least urgent of all.
        at_hub.sort_by(|a, b| match (a.expected_delivery(), b.expected_delivery()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => y.cmp(&x),
        });
        at_hub.truncate(MAX_SHIPMENTS_PER_HUB);
        at_hub
    }

    fn viable_route(
        &self,
        assembler: &RouteAssembler<'_>,
        alternate_hub: &str,
        shipment: &Shipment,
    ) -> Option<RouteResult> {
        let options = RouteOptions::new()
            .with_weight_kg(shipment.weight_kg())
            .with_volume_cbm(shipment.volume_cbm());
        let outcome = assembler.find_route(
            alternate_hub,
            shipment.destination_hub(),
            shipment.service_level(),
            &options,
        );
        outcome
            .route()
            .filter(|r| r.total_transit_hours() < MAX_REROUTE_TRANSIT_HOURS)
            .cloned()
    }
}
