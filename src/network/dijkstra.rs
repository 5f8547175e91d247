//! Shortest-path search over the routing graph.
//!
//! # Algorithm
//!
//! Dijkstra's algorithm with a binary-heap frontier, O((V+E) log V). Edge
//! weights must be non-negative, which graph construction guarantees.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::models::Leg;

use super::graph::RoutingGraph;

/// Edge weight selected per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptimizeFor {
    /// Minimize total cost for the queried load (default).
    #[default]
    Cost,
    /// Minimize schedule-adjusted transit time.
    Time,
    /// Minimize distance in kilometers.
    Distance,
}

impl OptimizeFor {
    fn weight(&self, leg: &Leg, weight_kg: f64, volume_cbm: f64) -> f64 {
        match self {
            OptimizeFor::Cost => leg.cost(weight_kg, volume_cbm),
            OptimizeFor::Time => leg.effective_transit_hours(),
            OptimizeFor::Distance => leg.distance_km(),
        }
    }
}

/// A frontier entry ordered so the heap pops the minimum weight first.
struct Frontier {
    weight: f64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.node == other.node
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest weight.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Finds the minimum-weight path between two hubs.
///
/// Returns the node indices of the path from origin to destination, or an
/// empty vector when either hub is absent from the graph, the destination
/// is unreachable, or the reconstructed path does not begin at the origin
/// (disconnected graph).
pub fn shortest_path(
    graph: &RoutingGraph,
    legs: &[Leg],
    origin: &str,
    destination: &str,
    optimize_for: OptimizeFor,
    weight_kg: f64,
    volume_cbm: f64,
) -> Vec<usize> {
    let (Some(source), Some(target)) = (graph.index_of(origin), graph.index_of(destination))
    else {
        return Vec::new();
    };

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = 0.0;
    heap.push(Frontier {
        weight: 0.0,
        node: source,
    });

    while let Some(Frontier { weight, node }) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        if node == target {
            break;
        }

        for edge in graph.neighbors(node) {
            let leg = &legs[edge.leg];
            let next = weight + optimize_for.weight(leg, weight_kg, volume_cbm);
            if next < dist[edge.to] {
                dist[edge.to] = next;
                predecessor[edge.to] = Some(node);
                heap.push(Frontier {
                    weight: next,
                    node: edge.to,
                });
            }
        }
    }

    if dist[target].is_infinite() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = predecessor[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    if path[0] != source {
        return Vec::new();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_ids(graph: &RoutingGraph, path: &[usize]) -> Vec<String> {
        path.iter().map(|&i| graph.hub_id(i).to_string()).collect()
    }

    fn solve(legs: &[Leg], origin: &str, destination: &str, optimize_for: OptimizeFor) -> Vec<String> {
        let graph = RoutingGraph::build(legs, "standard");
        let path = shortest_path(&graph, legs, origin, destination, optimize_for, 0.0, 0.0);
        path_ids(&graph, &path)
    }

    #[test]
    fn test_single_edge() {
        let legs = vec![Leg::new("A", "B", "standard", 100.0, 2.0, 50.0)];
        assert_eq!(solve(&legs, "A", "B", OptimizeFor::Cost), vec!["A", "B"]);
    }

    #[test]
    fn test_prefers_cheaper_two_hop_over_expensive_direct() {
        let legs = vec![
            Leg::new("A", "C", "standard", 100.0, 2.0, 500.0),
            Leg::new("A", "B", "standard", 60.0, 1.5, 100.0),
            Leg::new("B", "C", "standard", 60.0, 1.5, 100.0),
        ];
        assert_eq!(
            solve(&legs, "A", "C", OptimizeFor::Cost),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_weight_selection_changes_path() {
        // Direct is shorter in km but slower; via B is faster but longer.
        let legs = vec![
            Leg::new("A", "C", "standard", 100.0, 10.0, 50.0),
            Leg::new("A", "B", "standard", 80.0, 2.0, 50.0),
            Leg::new("B", "C", "standard", 80.0, 2.0, 50.0),
        ];
        assert_eq!(solve(&legs, "A", "C", OptimizeFor::Distance), vec!["A", "C"]);
        assert_eq!(
            solve(&legs, "A", "C", OptimizeFor::Time),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_unreachable_destination() {
        let legs = vec![
            Leg::new("A", "B", "standard", 100.0, 2.0, 50.0),
            Leg::new("C", "D", "standard", 100.0, 2.0, 50.0),
        ];
        assert!(solve(&legs, "A", "D", OptimizeFor::Cost).is_empty());
    }

    #[test]
    fn test_unknown_hubs() {
        let legs = vec![Leg::new("A", "B", "standard", 100.0, 2.0, 50.0)];
        assert!(solve(&legs, "A", "Z", OptimizeFor::Cost).is_empty());
        assert!(solve(&legs, "Z", "B", OptimizeFor::Cost).is_empty());
    }

    #[test]
    fn test_cycle_terminates() {
        let legs = vec![
            Leg::new("A", "B", "standard", 10.0, 1.0, 10.0),
            Leg::new("B", "A", "standard", 10.0, 1.0, 10.0),
            Leg::new("B", "C", "standard", 10.0, 1.0, 10.0),
        ];
        assert_eq!(
            solve(&legs, "A", "C", OptimizeFor::Cost),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_cost_weight_uses_load() {
        // Leg via B is cheap empty but expensive per kg.
        let legs = vec![
            Leg::new("A", "C", "standard", 100.0, 2.0, 200.0),
            Leg::new("A", "B", "standard", 60.0, 1.5, 50.0).with_cost_per_kg(2.0),
            Leg::new("B", "C", "standard", 60.0, 1.5, 50.0).with_cost_per_kg(2.0),
        ];
        let graph = RoutingGraph::build(&legs, "standard");
        let empty = shortest_path(&graph, &legs, "A", "C", OptimizeFor::Cost, 0.0, 0.0);
        assert_eq!(path_ids(&graph, &empty), vec!["A", "B", "C"]);
        let heavy = shortest_path(&graph, &legs, "A", "C", OptimizeFor::Cost, 100.0, 0.0);
        assert_eq!(path_ids(&graph, &heavy), vec!["A", "C"]);
    }

    mod optimality {
        use super::*;
        use proptest::prelude::*;

        // Exhaustive simple-path search over the same collapsed graph.
        fn brute_force_min(
            graph: &RoutingGraph,
            legs: &[Leg],
            source: usize,
            target: usize,
        ) -> Option<f64> {
            fn dfs(
                graph: &RoutingGraph,
                legs: &[Leg],
                node: usize,
                target: usize,
                visited: &mut Vec<bool>,
                weight: f64,
                best: &mut Option<f64>,
            ) {
                if node == target {
                    *best = Some(best.map_or(weight, |b: f64| b.min(weight)));
                    return;
                }
                for edge in graph.neighbors(node) {
                    if visited[edge.to] {
                        continue;
                    }
                    visited[edge.to] = true;
                    dfs(
                        graph,
                        legs,
                        edge.to,
                        target,
                        visited,
                        weight + legs[edge.leg].distance_km(),
                        best,
                    );
                    visited[edge.to] = false;
                }
            }

            let mut visited = vec![false; graph.node_count()];
            visited[source] = true;
            let mut best = None;
            dfs(graph, legs, source, target, &mut visited, 0.0, &mut best);
            best
        }

        fn path_weight(graph: &RoutingGraph, legs: &[Leg], path: &[usize]) -> f64 {
            path.windows(2)
                .map(|pair| {
                    let edge = graph
                        .neighbors(pair[0])
                        .iter()
                        .find(|e| e.to == pair[1])
                        .expect("path follows graph edges");
                    legs[edge.leg].distance_km()
                })
                .sum()
        }

        proptest! {
            #[test]
            fn dijkstra_matches_brute_force(
                edges in prop::collection::vec((0..5usize, 0..5usize, 0.1..100.0f64), 1..15)
            ) {
                let legs: Vec<Leg> = edges
                    .iter()
                    .map(|&(u, v, w)| {
                        Leg::new(format!("H{u}"), format!("H{v}"), "standard", w, 1.0, 1.0)
                    })
                    .collect();
                let graph = RoutingGraph::build(&legs, "standard");
                let (Some(source), Some(target)) =
                    (graph.index_of("H0"), graph.index_of("H4"))
                else {
                    return Ok(());
                };

                let path = shortest_path(
                    &graph, &legs, "H0", "H4", OptimizeFor::Distance, 0.0, 0.0,
                );
                let expected = brute_force_min(&graph, &legs, source, target);

                match expected {
                    Some(best) => {
                        prop_assert!(!path.is_empty());
                        let actual = path_weight(&graph, &legs, &path);
                        prop_assert!((actual - best).abs() < 1e-9);
                    }
                    None => prop_assert!(path.is_empty()),
                }
            }
        }
    }
}
