//! Geodetic primitives shared by the network and sequencing tiers.
//!
//! - [`GeoPoint`] — a latitude/longitude coordinate pair
//! - [`haversine_km`] — great-circle distance between two points
//! - [`traffic_factor`] — time-of-day travel-time multiplier
//! - [`travel_hours`] — travel-time estimation at a given average speed

mod distance;

pub use distance::{haversine_km, traffic_factor, travel_hours, GeoPoint, EARTH_RADIUS_KM};
