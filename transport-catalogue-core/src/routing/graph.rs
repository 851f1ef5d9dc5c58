//! Routing graph built from the catalogue
//!
//! Every stop is split into an input and an output vertex joined by a wait
//! edge, so the boarding delay is paid once per stop where a bus is boarded.
//! Ride edges lead from the output vertex of a boarding stop to the input
//! vertex of every later stop reachable on the same bus without changing.

use itertools::Itertools;
use log::{debug, info};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use super::weight::RouteWeight;
use crate::{BusId, EdgeId, Minutes, RoutingSettings, StopId, TransitCatalogue, VertexId};

/// Meters per minute at 1 km/h
const KMH_TO_METERS_PER_MINUTE: f64 = 1000.0 / 60.0;

/// Vertex pair of a single stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    pub input: VertexId,
    pub output: VertexId,
}

impl StopVertices {
    pub fn of(stop: StopId) -> Self {
        Self {
            input: 2 * stop,
            output: 2 * stop + 1,
        }
    }
}

/// Immutable wait/ride graph. Node weights hold the owning stop.
#[derive(Debug, Clone)]
pub struct TransitGraph {
    graph: DiGraph<StopId, RouteWeight>,
}

impl TransitGraph {
    /// Builds the graph for the whole catalogue
    pub fn build(catalogue: &TransitCatalogue, settings: &RoutingSettings) -> Self {
        let mut builder = GraphBuilder {
            catalogue,
            velocity: settings.bus_velocity,
            graph: DiGraph::with_capacity(2 * catalogue.stop_count(), catalogue.stop_count()),
        };

        builder.add_stops(settings.bus_wait_time);
        for (bus_id, bus) in catalogue.buses().iter().enumerate() {
            let route: Vec<StopId> = bus.route().collect();
            let added = if bus.is_roundtrip {
                builder.add_roundtrip_rides(bus_id, &route)
            } else {
                builder.add_linear_rides(bus_id, &route)
            };
            debug!("Bus {:?}: {added} ride edges", bus.name);
        }

        let graph = builder.graph;
        info!(
            "Built routing graph with {} vertices and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Self { graph }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Source vertex, target vertex and weight of an edge
    pub fn edge(&self, edge: EdgeId) -> Option<(VertexId, VertexId, &RouteWeight)> {
        let index = EdgeIndex::new(edge);
        let (source, target) = self.graph.edge_endpoints(index)?;
        let weight = self.graph.edge_weight(index)?;
        Some((source.index(), target.index(), weight))
    }

    /// Edge weights in insertion order
    pub fn edge_weights(&self) -> impl Iterator<Item = &RouteWeight> {
        self.graph.edge_weights()
    }

    pub fn inner(&self) -> &DiGraph<StopId, RouteWeight> {
        &self.graph
    }
}

struct GraphBuilder<'a> {
    catalogue: &'a TransitCatalogue,
    velocity: f64,
    graph: DiGraph<StopId, RouteWeight>,
}

impl GraphBuilder<'_> {
    fn add_stops(&mut self, wait_time: Minutes) {
        for stop_id in 0..self.catalogue.stop_count() {
            let input = self.graph.add_node(stop_id);
            let output = self.graph.add_node(stop_id);
            debug_assert_eq!(StopVertices::of(stop_id).input, input.index());
            self.graph
                .add_edge(input, output, RouteWeight::wait(stop_id, wait_time));
        }
    }

    /// One edge for every ordered pair of the route
    fn add_roundtrip_rides(&mut self, bus: BusId, route: &[StopId]) -> usize {
        let mut added = 0;
        for (i, &from) in route.iter().enumerate() {
            let mut distance = 0_u64;
            for (span, (&prev, &to)) in route[i..].iter().tuple_windows().enumerate() {
                distance += u64::from(self.catalogue.distance(prev, to));
                self.add_ride(from, to, RouteWeight::ride(bus, span + 1, self.minutes(distance)));
                added += 1;
            }
        }
        added
    }

    /// Pairs of the forward half only, each with an edge in both directions.
    /// The backward direction accumulates its own reverse distances.
    fn add_linear_rides(&mut self, bus: BusId, route: &[StopId]) -> usize {
        let half = &route[..route.len().div_ceil(2)];
        let mut added = 0;
        for (i, &from) in half.iter().enumerate() {
            let mut forward = 0_u64;
            let mut backward = 0_u64;
            for (span, (&prev, &to)) in half[i..].iter().tuple_windows().enumerate() {
                forward += u64::from(self.catalogue.distance(prev, to));
                backward += u64::from(self.catalogue.distance(to, prev));
                self.add_ride(from, to, RouteWeight::ride(bus, span + 1, self.minutes(forward)));
                self.add_ride(to, from, RouteWeight::ride(bus, span + 1, self.minutes(backward)));
                added += 2;
            }
        }
        added
    }

    fn add_ride(&mut self, from: StopId, to: StopId, weight: RouteWeight) {
        self.graph.add_edge(
            NodeIndex::new(StopVertices::of(from).output),
            NodeIndex::new(StopVertices::of(to).input),
            weight,
        );
    }

    #[allow(clippy::cast_precision_loss)]
    fn minutes(&self, distance: u64) -> Minutes {
        distance as f64 / (self.velocity * KMH_TO_METERS_PER_MINUTE)
    }
}
