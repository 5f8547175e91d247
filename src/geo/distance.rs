//! Haversine distance and travel-time estimation.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude coordinate pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use freight_routing::geo::GeoPoint;
///
/// let seattle = GeoPoint::new(47.6062, -122.3321);
/// let portland = GeoPoint::new(45.5152, -122.6784);
/// let d = seattle.distance_km(&portland);
/// assert!(d > 230.0 && d < 240.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a coordinate pair from decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self, other)
    }
}

/// Great-circle distance between two points using the Haversine formula.
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Time-of-day travel-time multiplier.
///
/// Peak hours (07:00–09:00 and 17:00–19:00) slow travel by 1.8×, midday
/// (10:00–16:00) is neutral, and all other hours run at 0.8×.
pub fn traffic_factor(hour: u32) -> f64 {
    match hour {
        7..=9 | 17..=19 => 1.8,
        10..=16 => 1.0,
        _ => 0.8,
    }
}

/// Estimated travel time in hours for a distance at the given average speed,
/// adjusted by a traffic multiplier.
pub fn travel_hours(distance_km: f64, speed_kmh: f64, factor: f64) -> f64 {
    if speed_kmh <= 0.0 {
        return 0.0;
    }
    distance_km / speed_kmh * factor
}
