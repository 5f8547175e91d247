//! Delivery stop and time window types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A delivery time window constraint.
///
/// The vehicle may arrive as early as `start` (waiting is allowed) and must
/// arrive no later than `end`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use freight_routing::models::TimeWindow;
///
/// let start = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
/// let tw = TimeWindow::new(start, end).unwrap();
/// assert!(tw.contains(start));
/// assert!(!tw.is_violated(end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window. Returns `None` if `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Earliest allowable arrival.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Latest allowable arrival.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` if the given time falls within the window.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.start && time <= self.end
    }

    /// Returns `true` if arriving at the given time misses the window.
    pub fn is_violated(&self, arrival: DateTime<Utc>) -> bool {
        arrival > self.end
    }
}

/// A delivery stop consumed by the sequencing tier.
///
/// Stops are never mutated by the optimizer. A stop may lack coordinates;
/// proximity scoring then falls back to a neutral distance instead of
/// failing the call.
///
/// # Examples
///
/// ```
/// use freight_routing::models::Stop;
///
/// let stop = Stop::new("SHP-1", 47.6, -122.3, 12.0, 0.5).with_priority(2);
/// assert!(stop.position().is_some());
/// assert_eq!(stop.priority(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    shipment_id: String,
    position: Option<GeoPoint>,
    weight_kg: f64,
    volume_cbm: f64,
    priority: i32,
    time_window: Option<TimeWindow>,
    requires_cold_chain: bool,
    fragile: bool,
}

impl Stop {
    /// Creates a stop at the given coordinates.
    pub fn new(
        shipment_id: impl Into<String>,
        lat: f64,
        lon: f64,
        weight_kg: f64,
        volume_cbm: f64,
    ) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            position: Some(GeoPoint::new(lat, lon)),
            weight_kg,
            volume_cbm,
            priority: 0,
            time_window: None,
            requires_cold_chain: false,
            fragile: false,
        }
    }

    /// Creates a stop with unknown coordinates.
    pub fn unlocated(shipment_id: impl Into<String>, weight_kg: f64, volume_cbm: f64) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            position: None,
            weight_kg,
            volume_cbm,
            priority: 0,
            time_window: None,
            requires_cold_chain: false,
            fragile: false,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets a delivery time window.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = Some(tw);
        self
    }

    /// Flags the stop as requiring cold-chain handling.
    pub fn with_cold_chain(mut self) -> Self {
        self.requires_cold_chain = true;
        self
    }

    /// Flags the stop's shipment as fragile.
    pub fn with_fragile(mut self) -> Self {
        self.fragile = true;
        self
    }

    /// Shipment identifier this stop delivers.
    pub fn shipment_id(&self) -> &str {
        &self.shipment_id
    }

    /// Delivery coordinates, if known.
    pub fn position(&self) -> Option<&GeoPoint> {
        self.position.as_ref()
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Volume in cubic meters.
    pub fn volume_cbm(&self) -> f64 {
        self.volume_cbm
    }

    /// Delivery priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Delivery time window, if any.
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }

    /// `true` if the stop requires cold-chain handling.
    pub fn requires_cold_chain(&self) -> bool {
        self.requires_cold_chain
    }

    /// `true` if the shipment is fragile.
    pub fn fragile(&self) -> bool {
        self.fragile
    }
}
