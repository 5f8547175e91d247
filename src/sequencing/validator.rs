//! Post-hoc constraint validation of sequenced routes.

use crate::models::{ConstraintModel, SequenceViolation, SequencedRoute};

/// Checks a sequenced route against its constraint model.
///
/// Violations are informational; callers decide whether to accept a
/// constrained route. Route duration is measured from departure to the
/// last estimated arrival.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use freight_routing::models::{ConstraintModel, SequencedRoute};
/// use freight_routing::sequencing::validate;
///
/// let departure = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
/// let route = SequencedRoute::new(departure);
/// assert!(validate(&route, &ConstraintModel::new()).is_empty());
/// ```
pub fn validate(route: &SequencedRoute, constraints: &ConstraintModel) -> Vec<SequenceViolation> {
    let mut violations = Vec::new();

    if let Some(vehicle) = constraints.vehicle() {
        if let Some(max_km) = vehicle.max_distance_km() {
            if route.total_distance_km() > max_km {
                violations.push(SequenceViolation::DistanceExceeded {
                    distance_km: route.total_distance_km(),
                    max_km,
                });
            }
        }
    }

    if let Some(driver) = constraints.driver() {
        if let Some(last) = route.last_arrival() {
            let hours = (last - route.departure()).num_seconds() as f64 / 3600.0;
            if hours > driver.max_working_hours() {
                violations.push(SequenceViolation::WorkingHoursExceeded {
                    hours,
                    max_hours: driver.max_working_hours(),
                });
            }
        }
        if route.len() > driver.max_stops_per_day() {
            violations.push(SequenceViolation::StopsExceeded {
                stops: route.len(),
                max_stops: driver.max_stops_per_day(),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DriverConstraint, VehicleConstraint};
    use chrono::{Duration, TimeZone, Utc};

    fn route_with(stops: usize, km_each: f64, hours_total: f64) -> SequencedRoute {
        let departure = Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap();
        let mut route = SequencedRoute::new(departure);
        for i in 0..stops {
            let fraction = (i + 1) as f64 / stops as f64;
            let arrival =
                departure + Duration::seconds((hours_total * fraction * 3600.0).round() as i64);
            route.push_stop(format!("SHP-{i}"), arrival, km_each);
        }
        route
    }

    #[test]
    fn test_unconstrained_route_has_no_violations() {
        let route = route_with(5, 10.0, 4.0);
        assert!(validate(&route, &ConstraintModel::new()).is_empty());
    }

    #[test]
    fn test_distance_exceeded() {
        let route = route_with(5, 100.0, 4.0);
        let constraints = ConstraintModel::new()
            .with_vehicle(VehicleConstraint::new(1000.0, 10.0).with_max_distance_km(300.0));
        let violations = validate(&route, &constraints);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            SequenceViolation::DistanceExceeded { max_km, .. } if max_km == 300.0
        ));
    }

    #[test]
    fn test_working_hours_exceeded() {
        let route = route_with(5, 10.0, 12.0);
        let constraints =
            ConstraintModel::new().with_driver(DriverConstraint::new(8.0, 100));
        let violations = validate(&route, &constraints);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            SequenceViolation::WorkingHoursExceeded { max_hours, .. } if max_hours == 8.0
        ));
    }

    #[test]
    fn test_stops_exceeded() {
        let route = route_with(6, 1.0, 2.0);
        let constraints = ConstraintModel::new().with_driver(DriverConstraint::new(24.0, 5));
        let violations = validate(&route, &constraints);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            SequenceViolation::StopsExceeded { stops: 6, max_stops: 5 }
        ));
    }

    #[test]
    fn test_multiple_violations_reported_together() {
        let route = route_with(6, 100.0, 12.0);
        let constraints = ConstraintModel::new()
            .with_vehicle(VehicleConstraint::new(1000.0, 10.0).with_max_distance_km(300.0))
            .with_driver(DriverConstraint::new(8.0, 5));
        let violations = validate(&route, &constraints);
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_limits_met_exactly_pass() {
        let route = route_with(5, 60.0, 8.0);
        let constraints = ConstraintModel::new()
            .with_vehicle(VehicleConstraint::new(1000.0, 10.0).with_max_distance_km(300.0))
            .with_driver(DriverConstraint::new(8.0, 5));
        assert!(validate(&route, &constraints).is_empty());
    }
}
