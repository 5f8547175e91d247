//! Directed weighted routing graph over hub ids.

use std::collections::HashMap;

use tracing::debug;

use crate::models::Leg;

/// An edge in the routing graph, referencing a leg in the slice the graph
/// was built from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edge {
    /// Node index of the neighbor hub.
    pub to: usize,
    /// Index into the source leg slice.
    pub leg: usize,
}

/// Adjacency graph of hubs connected by active scheduled legs for a single
/// service level.
///
/// Rebuilt per service level. Self-loop legs are skipped, parallel edges to
/// the same neighbor are collapsed last-write-wins, and cycles are allowed.
/// Every leg endpoint becomes a node, including hubs that only ever appear
/// as destinations.
///
/// # Examples
///
/// ```
/// use freight_routing::models::Leg;
/// use freight_routing::network::RoutingGraph;
///
/// let legs = vec![
///     Leg::new("A", "B", "standard", 100.0, 2.0, 50.0),
///     Leg::new("B", "C", "standard", 150.0, 3.0, 70.0),
///     Leg::new("A", "B", "express", 100.0, 1.0, 90.0),
/// ];
/// let graph = RoutingGraph::build(&legs, "standard");
/// assert_eq!(graph.node_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RoutingGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl RoutingGraph {
    /// Builds a graph from all active legs matching the service level.
    ///
    /// Side-effect-free; safe to call repeatedly. Legs with negative
    /// distance, transit time, or base cost are skipped to preserve the
    /// non-negative-weight invariant of the shortest-path search.
    pub fn build(legs: &[Leg], service_level: &str) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        };

        for (leg_idx, leg) in legs.iter().enumerate() {
            if !leg.is_active() || leg.service_level() != service_level {
                continue;
            }
            if leg.origin() == leg.destination() {
                continue;
            }
            if leg.distance_km() < 0.0 || leg.transit_hours() < 0.0 || leg.base_cost() < 0.0 {
                debug!(
                    origin = leg.origin(),
                    destination = leg.destination(),
                    "skipping leg with negative weight"
                );
                continue;
            }

            let from = graph.intern(leg.origin());
            let to = graph.intern(leg.destination());

            // Last-write-wins collapse of parallel edges.
            let edges = &mut graph.adjacency[from];
            match edges.iter_mut().find(|e| e.to == to) {
                Some(edge) => edge.leg = leg_idx,
                None => edges.push(Edge { to, leg: leg_idx }),
            }
        }

        graph
    }

    fn intern(&mut self, hub_id: &str) -> usize {
        if let Some(&idx) = self.index.get(hub_id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(hub_id.to_string());
        self.index.insert(hub_id.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Number of hubs in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node index for a hub id, if the hub appears in the graph.
    pub fn index_of(&self, hub_id: &str) -> Option<usize> {
        self.index.get(hub_id).copied()
    }

    /// Hub id at a node index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn hub_id(&self, index: usize) -> &str {
        &self.nodes[index]
    }

    pub(crate) fn neighbors(&self, index: usize) -> &[Edge] {
        &self.adjacency[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legs() -> Vec<Leg> {
        vec![
            Leg::new("A", "B", "standard", 100.0, 2.0, 50.0),
            Leg::new("B", "C", "standard", 150.0, 3.0, 70.0),
            Leg::new("A", "B", "express", 100.0, 1.0, 90.0),
        ]
    }

    #[test]
    fn test_build_filters_service_level() {
        let graph = RoutingGraph::build(&legs(), "standard");
        assert_eq!(graph.node_count(), 3);
        let a = graph.index_of("A").expect("A interned");
        assert_eq!(graph.neighbors(a).len(), 1);
    }

    #[test]
    fn test_destination_only_hub_gets_node() {
        let graph = RoutingGraph::build(&legs(), "standard");
        // C never appears as an origin but must still be a node
        assert!(graph.index_of("C").is_some());
        let c = graph.index_of("C").expect("C interned");
        assert!(graph.neighbors(c).is_empty());
    }

    #[test]
    fn test_inactive_legs_skipped() {
        let legs = vec![Leg::new("A", "B", "standard", 100.0, 2.0, 50.0).inactive()];
        let graph = RoutingGraph::build(&legs, "standard");
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_self_loop_skipped() {
        let legs = vec![Leg::new("A", "A", "standard", 0.0, 0.0, 0.0)];
        let graph = RoutingGraph::build(&legs, "standard");
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_parallel_edges_last_write_wins() {
        let legs = vec![
            Leg::new("A", "B", "standard", 100.0, 2.0, 50.0),
            Leg::new("A", "B", "standard", 90.0, 2.0, 45.0),
        ];
        let graph = RoutingGraph::build(&legs, "standard");
        let a = graph.index_of("A").expect("A interned");
        assert_eq!(graph.neighbors(a).len(), 1);
        assert_eq!(graph.neighbors(a)[0].leg, 1);
    }

    #[test]
    fn test_negative_weight_leg_skipped() {
        let legs = vec![Leg::new("A", "B", "standard", -5.0, 2.0, 50.0)];
        let graph = RoutingGraph::build(&legs, "standard");
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_unknown_hub_lookup() {
        let graph = RoutingGraph::build(&legs(), "standard");
        assert!(graph.index_of("Z").is_none());
    }
}
