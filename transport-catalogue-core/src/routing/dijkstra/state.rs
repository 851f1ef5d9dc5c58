use std::{cmp::Ordering, collections::BinaryHeap};

use fixedbitset::FixedBitSet;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::routing::PathWeight;

#[derive(Clone)]
pub(super) struct State<W> {
    pub(super) cost: W,
    pub(super) node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl<W: PathWeight> Ord for State<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other
            .cost
            .compare(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<W: PathWeight> PartialOrd for State<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PathWeight> PartialEq for State<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PathWeight> Eq for State<W> {}

/// Working memory of a single query
pub(super) struct SearchState<W> {
    /// Best known weight of a path to each node
    pub(super) best: Vec<Option<W>>,
    /// Last edge of the best known path to each node
    pub(super) incoming: Vec<Option<EdgeIndex>>,
    /// Nodes whose best path is final
    pub(super) settled: FixedBitSet,
    pub(super) heap: BinaryHeap<State<W>>,
}

impl<W: PathWeight> SearchState<W> {
    pub(super) fn new(node_count: usize) -> Self {
        SearchState {
            best: vec![None; node_count],
            incoming: vec![None; node_count],
            settled: FixedBitSet::with_capacity(node_count),
            heap: BinaryHeap::new(),
        }
    }

    /// Records `cost` as a path to `node` through `edge` if it beats the best
    /// known one
    pub(super) fn update(&mut self, node: NodeIndex, edge: EdgeIndex, cost: W) {
        let idx = node.index();
        if self.settled.contains(idx) {
            return;
        }
        let improves = self.best[idx]
            .as_ref()
            .is_none_or(|best| cost.compare(best) == Ordering::Less);
        if improves {
            self.best[idx] = Some(cost.clone());
            self.incoming[idx] = Some(edge);
            self.heap.push(State { cost, node });
        }
    }
}
