//! Cluster-balanced sequencing.
//!
//! # Algorithm
//!
//! Partitions stops into geographic clusters with fixed-iteration k-means
//! (initial centroids are the first k stops, reassignment by nearest
//! centroid, centroid recomputed as the mean lat/lon of its members),
//! then runs nearest-neighbor independently inside each cluster and
//! concatenates the sub-routes with globally renumbered sequences.
//!
//! # Complexity
//!
//! O(n·k·i) for clustering plus O(m²) nearest-neighbor per cluster.

use chrono::{DateTime, Utc};

use crate::geo::GeoPoint;
use crate::models::{ConstraintModel, SequencedRoute, Stop};

use super::nearest_neighbor::nearest_neighbor;

/// Number of geographic clusters (capped at the stop count).
pub const CLUSTER_COUNT: usize = 5;

/// Fixed k-means iteration count.
pub const KMEANS_ITERATIONS: usize = 10;

/// Partitions stops into at most `k` clusters of stop indices.
///
/// Stops without coordinates join the first cluster. Empty clusters are
/// omitted from the result.
pub fn cluster_stops(stops: &[Stop], k: usize, iterations: usize) -> Vec<Vec<usize>> {
    let n = stops.len();
    if n == 0 {
        return Vec::new();
    }
    let k = k.clamp(1, n);

    // Initial centroids: the first k stops (first located position, or a
    // zero point for unlocated seeds).
    let mut centroids: Vec<GeoPoint> = (0..k)
        .map(|i| {
            stops[i]
                .position()
                .copied()
                .unwrap_or_else(|| GeoPoint::new(0.0, 0.0))
        })
        .collect();

    let mut assignment = vec![0usize; n];
    for _ in 0..iterations {
        // Reassign each stop to its nearest centroid.
        for (i, stop) in stops.iter().enumerate() {
            let Some(position) = stop.position() else {
                assignment[i] = 0;
                continue;
            };
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (c, centroid) in centroids.iter().enumerate() {
                let d = position.distance_km(centroid);
                if d < best_distance {
                    best_distance = d;
                    best = c;
                }
            }
            assignment[i] = best;
        }

        // Recompute centroids as the mean lat/lon of members.
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&GeoPoint> = stops
                .iter()
                .enumerate()
                .filter(|&(i, _)| assignment[i] == c)
                .filter_map(|(_, s)| s.position())
                .collect();
            if members.is_empty() {
                continue;
            }
            let lat = members.iter().map(|p| p.lat()).sum::<f64>() / members.len() as f64;
            let lon = members.iter().map(|p| p.lon()).sum::<f64>() / members.len() as f64;
            *centroid = GeoPoint::new(lat, lon);
        }
    }

    let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &c) in assignment.iter().enumerate() {
        clusters[c].push(i);
    }
    clusters.retain(|c| !c.is_empty());
    clusters
}

/// Sequences stops cluster by cluster.
///
/// Each cluster is sequenced independently from the same departure time;
/// sequence numbers are renumbered globally across the concatenation and
/// capacity-dropped stops from every cluster are merged.
pub fn balanced(
    stops: &[Stop],
    constraints: &ConstraintModel,
    departure: DateTime<Utc>,
) -> SequencedRoute {
    let clusters = cluster_stops(stops, CLUSTER_COUNT, KMEANS_ITERATIONS);

    let mut route = SequencedRoute::new(departure);
    for cluster in clusters {
        let members: Vec<Stop> = cluster.iter().map(|&i| stops[i].clone()).collect();
        let sub_route = nearest_neighbor(&members, constraints, departure);
        for stop in sub_route.stops() {
            route.push_stop(
                stop.shipment_id.clone(),
                stop.estimated_arrival,
                stop.distance_from_previous_km,
            );
        }
        for shipment_id in sub_route.unsequenced() {
            route.add_unsequenced(shipment_id.clone());
        }
    }
    route
}
