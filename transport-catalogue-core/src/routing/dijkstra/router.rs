use petgraph::{
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use super::state::{SearchState, State};
use crate::routing::PathWeight;

/// Cheapest path found by [`Router::build_route`]
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo<W> {
    /// Combined weight of all edges, `None` for the empty path
    pub weight: Option<W>,
    /// Edges in traversal order
    pub edges: Vec<EdgeIndex>,
}

/// Single-source, single-target Dijkstra over a directed graph.
///
/// The router only borrows the graph. Every query allocates its own working
/// memory, so one router (or many) can serve queries from several threads.
#[derive(Debug, Clone, Copy)]
pub struct Router<'g, N, W> {
    graph: &'g DiGraph<N, W>,
}

impl<'g, N, W: PathWeight> Router<'g, N, W> {
    pub fn new(graph: &'g DiGraph<N, W>) -> Self {
        Self { graph }
    }

    /// Cheapest path from `source` to `target`.
    ///
    /// Returns `None` if either node is missing or `target` is unreachable.
    /// A query from a node to itself yields the empty path. Among paths of
    /// equal weight any one may be returned.
    pub fn build_route(&self, source: NodeIndex, target: NodeIndex) -> Option<RouteInfo<W>> {
        let node_count = self.graph.node_count();
        if source.index() >= node_count || target.index() >= node_count {
            return None;
        }
        if source == target {
            return Some(RouteInfo {
                weight: None,
                edges: Vec::new(),
            });
        }

        let mut state = SearchState::new(node_count);
        state.settled.insert(source.index());
        self.relax(&mut state, source, None);

        while let Some(State { cost, node }) = state.heap.pop() {
            // Stale entry, the node was settled through a cheaper path
            if state.settled.contains(node.index()) {
                continue;
            }
            state.settled.insert(node.index());

            if node == target {
                let edges = self.collect_edges(&state, source, target)?;
                return Some(RouteInfo {
                    weight: Some(cost),
                    edges,
                });
            }

            self.relax(&mut state, node, Some(&cost));
        }

        None
    }

    fn relax(&self, state: &mut SearchState<W>, node: NodeIndex, cost: Option<&W>) {
        for edge in self.graph.edges(node) {
            let next_cost = match cost {
                Some(cost) => cost.combine(edge.weight()),
                None => edge.weight().clone(),
            };
            state.update(edge.target(), edge.id(), next_cost);
        }
    }

    // Follow incoming edges backward from target to source
    fn collect_edges(
        &self,
        state: &SearchState<W>,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Option<Vec<EdgeIndex>> {
        let mut edges = Vec::new();
        let mut current = target;
        while current != source {
            let edge = state.incoming[current.index()]?;
            edges.push(edge);
            current = self.graph.edge_endpoints(edge)?.0;
        }
        edges.reverse();
        Some(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -> 1 -> 3 costs 2, 0 -> 2 -> 3 costs 5, 0 -> 3 costs 10
    fn diamond() -> DiGraph<(), u32> {
        let mut graph = DiGraph::new();
        let nodes: Vec<_> = (0..5).map(|_| graph.add_node(())).collect();
        graph.add_edge(nodes[0], nodes[3], 10);
        graph.add_edge(nodes[0], nodes[1], 1);
        graph.add_edge(nodes[1], nodes[3], 1);
        graph.add_edge(nodes[0], nodes[2], 2);
        graph.add_edge(nodes[2], nodes[3], 3);
        graph
    }

    #[test]
    fn finds_cheapest_path() {
        let graph = diamond();
        let router = Router::new(&graph);
        let route = router
            .build_route(NodeIndex::new(0), NodeIndex::new(3))
            .unwrap();
        assert_eq!(route.weight, Some(2));
        assert_eq!(route.edges, vec![EdgeIndex::new(1), EdgeIndex::new(2)]);
    }

    #[test]
    fn unreachable_target_is_none() {
        let graph = diamond();
        let router = Router::new(&graph);
        assert!(router.build_route(NodeIndex::new(0), NodeIndex::new(4)).is_none());
        assert!(router.build_route(NodeIndex::new(3), NodeIndex::new(0)).is_none());
    }

    #[test]
    fn missing_nodes_are_none() {
        let graph = diamond();
        let router = Router::new(&graph);
        assert!(router.build_route(NodeIndex::new(0), NodeIndex::new(42)).is_none());
        assert!(router.build_route(NodeIndex::new(42), NodeIndex::new(0)).is_none());
    }

    #[test]
    fn same_node_is_empty_path() {
        let graph = diamond();
        let router = Router::new(&graph);
        let route = router
            .build_route(NodeIndex::new(2), NodeIndex::new(2))
            .unwrap();
        assert_eq!(route.weight, None);
        assert!(route.edges.is_empty());
    }

    #[test]
    fn repeated_queries_agree() {
        let graph = diamond();
        let router = Router::new(&graph);
        let first = router.build_route(NodeIndex::new(0), NodeIndex::new(3));
        let second = router.build_route(NodeIndex::new(0), NodeIndex::new(3));
        assert_eq!(first, second);
    }

    #[test]
    fn cycles_do_not_loop_forever() {
        let mut graph = DiGraph::<(), u32>::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, 1);
        graph.add_edge(b, a, 1);
        graph.add_edge(b, c, 4);
        graph.add_edge(c, a, 1);

        let route = Router::new(&graph).build_route(a, c).unwrap();
        assert_eq!(route.weight, Some(5));
        assert_eq!(route.edges.len(), 2);
    }
}
