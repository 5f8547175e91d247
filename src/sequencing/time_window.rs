//! Time-window-aware sequencing.
//!
//! # Algorithm
//!
//! Sorts stops ascending by earliest delivery window (stops without a
//! window sort last), then delegates to the nearest-neighbor heuristic on
//! the sorted set. The sort is stable, so ties and windowless stops keep
//! their input order.

use chrono::{DateTime, Utc};

use crate::models::{ConstraintModel, SequencedRoute, Stop};

use super::nearest_neighbor::nearest_neighbor;

/// Sequences stops with delivery-window priority.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use freight_routing::models::{ConstraintModel, Stop, TimeWindow};
/// use freight_routing::sequencing::time_window;
///
/// let morning = TimeWindow::new(
///     Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 9, 1, 10, 0, 0).unwrap(),
/// ).unwrap();
/// let stops = vec![
///     Stop::new("LATE", 47.0, -122.0, 1.0, 0.1),
///     Stop::new("EARLY", 47.2, -122.0, 1.0, 0.1).with_time_window(morning),
/// ];
/// let departure = Utc.with_ymd_and_hms(2026, 9, 1, 7, 0, 0).unwrap();
/// let route = time_window(&stops, &ConstraintModel::new(), departure);
/// assert_eq!(route.stops()[0].shipment_id, "EARLY");
/// ```
pub fn time_window(
    stops: &[Stop],
    constraints: &ConstraintModel,
    departure: DateTime<Utc>,
) -> SequencedRoute {
    let mut sorted: Vec<Stop> = stops.to_vec();
    sorted.sort_by_key(|stop| match stop.time_window() {
        Some(tw) => (0u8, Some(tw.start())),
        None => (1u8, None),
    });
    nearest_neighbor(&sorted, constraints, departure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;
    use chrono::TimeZone;

    fn window(start_hour: u32) -> TimeWindow {
        let start = Utc.with_ymd_and_hms(2026, 9, 1, start_hour, 0, 0).unwrap();
        let end = start + chrono::Duration::hours(2);
        TimeWindow::new(start, end).expect("valid window")
    }

    fn departure() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 6, 0, 0).unwrap()
    }

    #[test]
    fn test_earliest_window_starts_route() {
        let stops = vec![
            Stop::new("NOON", 47.00, -122.0, 1.0, 0.1).with_time_window(window(12)),
            Stop::new("MORNING", 47.50, -122.0, 1.0, 0.1).with_time_window(window(8)),
        ];
        let route = time_window(&stops, &ConstraintModel::new(), departure());
        assert_eq!(route.stops()[0].shipment_id, "MORNING");
    }

    #[test]
    fn test_windowless_stops_sort_last() {
        let stops = vec![
            Stop::new("ANYTIME", 47.00, -122.0, 1.0, 0.1),
            Stop::new("WINDOWED", 48.00, -122.0, 1.0, 0.1).with_time_window(window(9)),
        ];
        let route = time_window(&stops, &ConstraintModel::new(), departure());
        assert_eq!(route.stops()[0].shipment_id, "WINDOWED");
    }

    #[test]
    fn test_all_stops_sequenced() {
        let stops = vec![
            Stop::new("A", 47.00, -122.0, 1.0, 0.1).with_time_window(window(12)),
            Stop::new("B", 47.01, -122.0, 1.0, 0.1),
            Stop::new("C", 47.02, -122.0, 1.0, 0.1).with_time_window(window(8)),
        ];
        let route = time_window(&stops, &ConstraintModel::new(), departure());
        assert_eq!(route.len(), 3);
        assert_eq!(route.stops()[0].shipment_id, "C");
    }

    #[test]
    fn test_empty_input() {
        let route = time_window(&[], &ConstraintModel::new(), departure());
        assert!(route.is_empty());
    }
}
