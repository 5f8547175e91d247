//! Hub type with configured capacity limits.

use serde::{Deserialize, Serialize};

/// Default maximum shipment count when a hub has no configured limit.
pub const DEFAULT_MAX_SHIPMENTS: u32 = 1000;

/// Default maximum weight in kilograms when a hub has no configured limit.
pub const DEFAULT_MAX_WEIGHT_KG: f64 = 50_000.0;

/// A network node (branch or transfer facility) that can originate, receive,
/// or transit shipments.
///
/// # Examples
///
/// ```
/// use freight_routing::models::Hub;
///
/// let hub = Hub::new("SEA", "Seattle Gateway").with_max_shipments(500);
/// assert_eq!(hub.id(), "SEA");
/// assert_eq!(hub.max_shipments(), 500);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
    id: String,
    name: String,
    max_shipments: Option<u32>,
    max_weight_kg: Option<f64>,
}

impl Hub {
    /// Creates a hub with no configured capacity limits.
    ///
    /// Unconfigured limits fall back to [`DEFAULT_MAX_SHIPMENTS`] and
    /// [`DEFAULT_MAX_WEIGHT_KG`].
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_shipments: None,
            max_weight_kg: None,
        }
    }

    /// Sets the maximum number of shipments this hub can hold.
    pub fn with_max_shipments(mut self, max: u32) -> Self {
        self.max_shipments = Some(max);
        self
    }

    /// Sets the maximum total weight this hub can hold, in kilograms.
    pub fn with_max_weight_kg(mut self, max: f64) -> Self {
        self.max_weight_kg = Some(max);
        self
    }

    /// Hub identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable hub name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured shipment limit, or the default.
    pub fn max_shipments(&self) -> u32 {
        self.max_shipments.unwrap_or(DEFAULT_MAX_SHIPMENTS)
    }

    /// Configured weight limit in kilograms, or the default.
    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_kg.unwrap_or(DEFAULT_MAX_WEIGHT_KG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_defaults() {
        let hub = Hub::new("SEA", "Seattle Gateway");
        assert_eq!(hub.id(), "SEA");
        assert_eq!(hub.name(), "Seattle Gateway");
        assert_eq!(hub.max_shipments(), DEFAULT_MAX_SHIPMENTS);
        assert_eq!(hub.max_weight_kg(), DEFAULT_MAX_WEIGHT_KG);
    }

    #[test]
    fn test_hub_configured_limits() {
        let hub = Hub::new("PDX", "Portland")
            .with_max_shipments(100)
            .with_max_weight_kg(5_000.0);
        assert_eq!(hub.max_shipments(), 100);
        assert_eq!(hub.max_weight_kg(), 5_000.0);
    }
}
