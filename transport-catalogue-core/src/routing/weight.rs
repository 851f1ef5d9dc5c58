//! Edge weights understood by the shortest-path solver

use std::cmp::Ordering;

use crate::{BusId, Minutes, StopId};

/// Additive, totally ordered path weight.
///
/// There is no identity element: a path weight is always the combination of
/// at least one edge weight. Weights are expected to be non-negative.
pub trait PathWeight: Clone {
    /// Weight of a path extended by an edge of weight `other`
    #[must_use]
    fn combine(&self, other: &Self) -> Self;

    /// Total order used to pick the cheapest path
    fn compare(&self, other: &Self) -> Ordering;
}

impl PathWeight for u32 {
    fn combine(&self, other: &Self) -> Self {
        self.saturating_add(*other)
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// What an edge of the transit graph stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Boarding delay at a stop
    Wait { stop: StopId },
    /// Riding one bus over `span_count` consecutive hops
    Ride { bus: BusId, span_count: usize },
}

/// Weight record of a transit graph edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteWeight {
    pub kind: EdgeKind,
    pub time: Minutes,
}

impl RouteWeight {
    pub fn wait(stop: StopId, time: Minutes) -> Self {
        Self {
            kind: EdgeKind::Wait { stop },
            time,
        }
    }

    pub fn ride(bus: BusId, span_count: usize, time: Minutes) -> Self {
        Self {
            kind: EdgeKind::Ride { bus, span_count },
            time,
        }
    }

    pub fn is_wait(&self) -> bool {
        matches!(self.kind, EdgeKind::Wait { .. })
    }

    pub fn span_count(&self) -> usize {
        match self.kind {
            EdgeKind::Wait { .. } => 0,
            EdgeKind::Ride { span_count, .. } => span_count,
        }
    }
}

impl PathWeight for RouteWeight {
    // Accumulated weight keeps the label of the first edge, only time adds up
    fn combine(&self, other: &Self) -> Self {
        Self {
            kind: self.kind,
            time: self.time + other.time,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.time.total_cmp(&other.time)
    }
}
