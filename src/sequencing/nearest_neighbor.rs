//! Nearest-neighbor sequencing heuristic.
//!
//! # Algorithm
//!
//! Starts at the first stop, then repeatedly visits the unvisited stop
//! with minimum Haversine distance from the current one. Sequencing stops
//! early when adding the selected stop would exceed vehicle capacity; the
//! remaining stops are reported as unsequenced rather than dropped
//! silently.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use chrono::{DateTime, Utc};

use crate::models::{ConstraintModel, SequencedRoute, Stop};

use super::builder::{SequenceBuilder, NEUTRAL_DISTANCE_KM};

/// Sequences stops greedily by nearest-neighbor selection.
///
/// Given fixed coordinates and starting stop, the produced sequence is
/// deterministic.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use freight_routing::models::{ConstraintModel, Stop};
/// use freight_routing::sequencing::nearest_neighbor;
///
/// let stops = vec![
///     Stop::new("A", 47.00, -122.0, 1.0, 0.1),
///     Stop::new("B", 47.02, -122.0, 1.0, 0.1),
///     Stop::new("C", 47.01, -122.0, 1.0, 0.1),
/// ];
/// let departure = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
/// let route = nearest_neighbor(&stops, &ConstraintModel::new(), departure);
/// assert_eq!(route.shipment_ids(), vec!["A", "C", "B"]);
/// ```
pub fn nearest_neighbor(
    stops: &[Stop],
    constraints: &ConstraintModel,
    departure: DateTime<Utc>,
) -> SequencedRoute {
    let builder = SequenceBuilder::new(stops);
    let n = stops.len();
    if n == 0 {
        return SequencedRoute::new(departure);
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut weight = 0.0;
    let mut volume = 0.0;
    let mut current = 0;
    let mut truncated = false;

    // The first stop is the starting point; capacity applies to it too.
    if fits(constraints, weight + stops[0].weight_kg(), volume + stops[0].volume_cbm()) {
        visited[0] = true;
        order.push(0);
        weight += stops[0].weight_kg();
        volume += stops[0].volume_cbm();
    } else {
        truncated = true;
    }

    while !truncated && order.len() < n {
        let Some(next) = nearest_unvisited(&builder, current, &visited) else {
            break;
        };
        if !fits(
            constraints,
            weight + stops[next].weight_kg(),
            volume + stops[next].volume_cbm(),
        ) {
            // Capacity exhausted: stop early, leaving the rest unsequenced.
            truncated = true;
            break;
        }
        visited[next] = true;
        order.push(next);
        weight += stops[next].weight_kg();
        volume += stops[next].volume_cbm();
        current = next;
    }

    let unsequenced: Vec<usize> = (0..n).filter(|&i| !visited[i]).collect();
    builder.build(&order, departure, &unsequenced)
}

fn fits(constraints: &ConstraintModel, weight_kg: f64, volume_cbm: f64) -> bool {
    match constraints.vehicle() {
        Some(vehicle) => vehicle.fits(weight_kg, volume_cbm),
        None => true,
    }
}

/// Unvisited stop nearest to `current`. Stops without coordinates score
/// the mean of the distances computable in the same decision (neutral),
/// or [`NEUTRAL_DISTANCE_KM`] when nothing is known.
fn nearest_unvisited(
    builder: &SequenceBuilder<'_>,
    current: usize,
    visited: &[bool],
) -> Option<usize> {
    let candidates: Vec<usize> = (0..visited.len()).filter(|&i| !visited[i]).collect();
    if candidates.is_empty() {
        return None;
    }

    let known: Vec<(usize, f64)> = candidates
        .iter()
        .filter_map(|&i| builder.distance_between(current, i).map(|d| (i, d)))
        .collect();
    let fallback = if known.is_empty() {
        NEUTRAL_DISTANCE_KM
    } else {
        known.iter().map(|&(_, d)| d).sum::<f64>() / known.len() as f64
    };

    candidates.into_iter().min_by(|&a, &b| {
        let da = builder.distance_between(current, a).unwrap_or(fallback);
        let db = builder.distance_between(current, b).unwrap_or(fallback);
        da.total_cmp(&db)
    })
}
