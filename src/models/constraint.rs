//! Vehicle and driver constraint types, and sequence violations.

use serde::{Deserialize, Serialize};

/// Capacity and range limits of a delivery vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleConstraint {
    max_weight_kg: f64,
    max_volume_cbm: f64,
    max_distance_km: Option<f64>,
}

impl VehicleConstraint {
    /// Creates a vehicle constraint with no distance limit.
    pub fn new(max_weight_kg: f64, max_volume_cbm: f64) -> Self {
        Self {
            max_weight_kg,
            max_volume_cbm,
            max_distance_km: None,
        }
    }

    /// Sets the maximum route distance in kilometers.
    pub fn with_max_distance_km(mut self, max: f64) -> Self {
        self.max_distance_km = Some(max);
        self
    }

    /// Maximum payload weight in kilograms.
    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_kg
    }

    /// Maximum payload volume in cubic meters.
    pub fn max_volume_cbm(&self) -> f64 {
        self.max_volume_cbm
    }

    /// Maximum route distance, if limited.
    pub fn max_distance_km(&self) -> Option<f64> {
        self.max_distance_km
    }

    /// Returns `true` if a load of the given weight and volume fits.
    pub fn fits(&self, weight_kg: f64, volume_cbm: f64) -> bool {
        weight_kg <= self.max_weight_kg && volume_cbm <= self.max_volume_cbm
    }
}

/// Working-time limits of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverConstraint {
    max_working_hours: f64,
    max_stops_per_day: usize,
}

impl DriverConstraint {
    /// Creates a driver constraint.
    pub fn new(max_working_hours: f64, max_stops_per_day: usize) -> Self {
        Self {
            max_working_hours,
            max_stops_per_day,
        }
    }

    /// Maximum route duration in hours.
    pub fn max_working_hours(&self) -> f64 {
        self.max_working_hours
    }

    /// Maximum stops a driver may serve per day.
    pub fn max_stops_per_day(&self) -> usize {
        self.max_stops_per_day
    }
}

/// Combined constraint model supplied per optimization call.
///
/// The engine never retains a constraint model across calls. An empty model
/// constrains nothing.
///
/// # Examples
///
/// ```
/// use freight_routing::models::{ConstraintModel, DriverConstraint, VehicleConstraint};
///
/// let model = ConstraintModel::new()
///     .with_vehicle(VehicleConstraint::new(1000.0, 12.0))
///     .with_driver(DriverConstraint::new(8.0, 40));
/// assert!(model.vehicle().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintModel {
    vehicle: Option<VehicleConstraint>,
    driver: Option<DriverConstraint>,
}

impl ConstraintModel {
    /// Creates an unconstrained model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vehicle constraint.
    pub fn with_vehicle(mut self, vehicle: VehicleConstraint) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    /// Adds a driver constraint.
    pub fn with_driver(mut self, driver: DriverConstraint) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Vehicle limits, if supplied.
    pub fn vehicle(&self) -> Option<&VehicleConstraint> {
        self.vehicle.as_ref()
    }

    /// Driver limits, if supplied.
    pub fn driver(&self) -> Option<&DriverConstraint> {
        self.driver.as_ref()
    }
}

/// A constraint violation found in a sequenced route.
///
/// Violations are informational, never fatal; callers decide whether to
/// accept a constrained route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SequenceViolation {
    /// Total route distance exceeds the vehicle maximum.
    DistanceExceeded {
        /// Actual route distance.
        distance_km: f64,
        /// Vehicle limit.
        max_km: f64,
    },
    /// Total route duration exceeds the driver's working hours.
    WorkingHoursExceeded {
        /// Actual route duration.
        hours: f64,
        /// Driver limit.
        max_hours: f64,
    },
    /// Stop count exceeds the driver's daily maximum.
    StopsExceeded {
        /// Actual stop count.
        stops: usize,
        /// Driver limit.
        max_stops: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_fits() {
        let v = VehicleConstraint::new(100.0, 10.0);
        assert!(v.fits(100.0, 10.0));
        assert!(!v.fits(100.1, 5.0));
        assert!(!v.fits(50.0, 10.1));
    }

    #[test]
    fn test_vehicle_max_distance() {
        let v = VehicleConstraint::new(100.0, 10.0);
        assert!(v.max_distance_km().is_none());
        assert_eq!(v.with_max_distance_km(250.0).max_distance_km(), Some(250.0));
    }

    #[test]
    fn test_model_unconstrained() {
        let model = ConstraintModel::new();
        assert!(model.vehicle().is_none());
        assert!(model.driver().is_none());
    }

    #[test]
    fn test_model_builder() {
        let model = ConstraintModel::new()
            .with_vehicle(VehicleConstraint::new(1000.0, 12.0))
            .with_driver(DriverConstraint::new(8.0, 40));
        assert_eq!(model.vehicle().expect("vehicle").max_weight_kg(), 1000.0);
        assert_eq!(model.driver().expect("driver").max_stops_per_day(), 40);
    }
}
