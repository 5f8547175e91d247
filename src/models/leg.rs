//! Scheduled leg type: a directed connection between two hubs.

use serde::{Deserialize, Serialize};

/// Transport mode of a scheduled leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportMode {
    /// Road freight.
    #[default]
    Truck,
    /// Rail freight.
    Rail,
    /// Air freight.
    Air,
}

/// One scheduled directed connection between two hubs for a given service
/// level.
///
/// Legs are immutable per query. Multiple legs may exist between the same
/// pair of hubs for different service levels or priorities; the
/// highest-priority leg wins when several match a direct lookup.
///
/// # Examples
///
/// ```
/// use freight_routing::models::Leg;
///
/// let leg = Leg::new("SEA", "PDX", "standard", 280.0, 5.0, 120.0)
///     .with_cost_per_kg(0.5)
///     .with_priority(2);
/// assert_eq!(leg.origin(), "SEA");
/// assert!((leg.cost(100.0, 0.0) - 170.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    origin: String,
    destination: String,
    service_level: String,
    distance_km: f64,
    transit_hours: f64,
    schedule_adjusted_hours: Option<f64>,
    base_cost: f64,
    cost_per_kg: f64,
    cost_per_cbm: f64,
    mode: TransportMode,
    departure_hour: Option<u32>,
    priority: i32,
    active: bool,
}

impl Leg {
    /// Creates an active leg with zero per-unit rates and priority 0.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        service_level: impl Into<String>,
        distance_km: f64,
        transit_hours: f64,
        base_cost: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            service_level: service_level.into(),
            distance_km,
            transit_hours,
            schedule_adjusted_hours: None,
            base_cost,
            cost_per_kg: 0.0,
            cost_per_cbm: 0.0,
            mode: TransportMode::default(),
            departure_hour: None,
            priority: 0,
            active: true,
        }
    }

    /// Sets the schedule-adjusted transit time in hours.
    pub fn with_schedule_adjusted_hours(mut self, hours: f64) -> Self {
        self.schedule_adjusted_hours = Some(hours);
        self
    }

    /// Sets the per-kilogram rate used by [`Leg::cost`].
    pub fn with_cost_per_kg(mut self, rate: f64) -> Self {
        self.cost_per_kg = rate;
        self
    }

    /// Sets the per-cubic-meter rate used by [`Leg::cost`].
    pub fn with_cost_per_cbm(mut self, rate: f64) -> Self {
        self.cost_per_cbm = rate;
        self
    }

    /// Sets the transport mode.
    pub fn with_mode(mut self, mode: TransportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the scheduled departure hour of day (0–23).
    pub fn with_departure_hour(mut self, hour: u32) -> Self {
        self.departure_hour = Some(hour);
        self
    }

    /// Sets the priority. Higher wins when several legs match a direct lookup.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Deactivates the leg so graph construction and lookups skip it.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Origin hub id.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Destination hub id.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Service level this leg is scoped to.
    pub fn service_level(&self) -> &str {
        &self.service_level
    }

    /// Leg distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Nominal transit time in hours.
    pub fn transit_hours(&self) -> f64 {
        self.transit_hours
    }

    /// Schedule-adjusted transit time, falling back to the nominal value.
    pub fn effective_transit_hours(&self) -> f64 {
        self.schedule_adjusted_hours.unwrap_or(self.transit_hours)
    }

    /// Base cost independent of load.
    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    /// Transport mode.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Scheduled departure hour of day, if any.
    pub fn departure_hour(&self) -> Option<u32> {
        self.departure_hour
    }

    /// Priority among legs matching the same lookup.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Whether this leg is active and eligible for routing.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Price of carrying the given load over this leg.
    pub fn cost(&self, weight_kg: f64, volume_cbm: f64) -> f64 {
        self.base_cost + self.cost_per_kg * weight_kg + self.cost_per_cbm * volume_cbm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leg_new_defaults() {
        let leg = Leg::new("SEA", "PDX", "standard", 280.0, 5.0, 120.0);
        assert_eq!(leg.origin(), "SEA");
        assert_eq!(leg.destination(), "PDX");
        assert_eq!(leg.service_level(), "standard");
        assert_eq!(leg.priority(), 0);
        assert!(leg.is_active());
        assert_eq!(leg.mode(), TransportMode::Truck);
        assert!(leg.departure_hour().is_none());
    }

    #[test]
    fn test_leg_cost_base_only() {
        let leg = Leg::new("SEA", "PDX", "standard", 280.0, 5.0, 120.0);
        assert!((leg.cost(100.0, 2.0) - 120.0).abs() < 1e-10);
    }

    #[test]
    fn test_leg_cost_with_rates() {
        let leg = Leg::new("SEA", "PDX", "standard", 280.0, 5.0, 120.0)
            .with_cost_per_kg(0.5)
            .with_cost_per_cbm(10.0);
        // 120 + 0.5*100 + 10*2 = 190
        assert!((leg.cost(100.0, 2.0) - 190.0).abs() < 1e-10);
    }

    #[test]
    fn test_leg_effective_transit_hours() {
        let leg = Leg::new("SEA", "PDX", "standard", 280.0, 5.0, 120.0);
        assert_eq!(leg.effective_transit_hours(), 5.0);
        let adjusted = leg.with_schedule_adjusted_hours(7.5);
        assert_eq!(adjusted.effective_transit_hours(), 7.5);
    }

    #[test]
    fn test_leg_inactive() {
        let leg = Leg::new("SEA", "PDX", "standard", 280.0, 5.0, 120.0).inactive();
        assert!(!leg.is_active());
    }
}
