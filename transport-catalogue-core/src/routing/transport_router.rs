use std::sync::Arc;

use log::debug;
use petgraph::graph::{EdgeIndex, NodeIndex};
use serde::Serialize;

use super::dijkstra::Router;
use super::graph::{StopVertices, TransitGraph};
use super::weight::{EdgeKind, RouteWeight};
use crate::{Error, Minutes, RoutingSettings, StopId, TransitCatalogue};

/// Part of a route: waiting at a stop or riding a bus
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteSegment {
    Wait {
        stop_name: String,
        time: Minutes,
    },
    #[serde(rename = "Bus")]
    Ride {
        #[serde(rename = "bus")]
        bus_name: String,
        span_count: usize,
        time: Minutes,
    },
}

impl RouteSegment {
    pub fn time(&self) -> Minutes {
        match self {
            RouteSegment::Wait { time, .. } | RouteSegment::Ride { time, .. } => *time,
        }
    }
}

/// Fastest route between two stops
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub total_time: Minutes,
    /// Segments in traversal order
    #[serde(rename = "items")]
    pub segments: Vec<RouteSegment>,
}

/// Answers fastest-route queries between named stops.
///
/// Owns the routing graph built once from the shared catalogue. Queries take
/// `&self` and allocate their own working memory.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    catalogue: Arc<TransitCatalogue>,
    settings: RoutingSettings,
    graph: TransitGraph,
}

impl TransportRouter {
    /// Validates the settings and builds the routing graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRouteSettings`] if the settings are out of range.
    pub fn new(catalogue: Arc<TransitCatalogue>, settings: RoutingSettings) -> Result<Self, Error> {
        settings.validate()?;
        let graph = TransitGraph::build(&catalogue, &settings);
        Ok(Self {
            catalogue,
            settings,
            graph,
        })
    }

    /// Fastest route from stop `from` to stop `to`.
    ///
    /// Returns `None` if either stop is unknown or no bus connects them.
    /// A route from a stop to itself is a single wait at that stop.
    pub fn build_route(&self, from: &str, to: &str) -> Option<RouteResult> {
        let Some(source) = self.catalogue.stop_id(from) else {
            debug!("No route {from:?} -> {to:?}: unknown source stop");
            return None;
        };
        let Some(target) = self.catalogue.stop_id(to) else {
            debug!("No route {from:?} -> {to:?}: unknown target stop");
            return None;
        };

        if source == target {
            return Some(self.wait_only_route(source));
        }

        let router = Router::new(self.graph.inner());
        let Some(info) = router.build_route(
            NodeIndex::new(StopVertices::of(source).input),
            NodeIndex::new(StopVertices::of(target).input),
        ) else {
            debug!("No route {from:?} -> {to:?}: stops are not connected");
            return None;
        };

        let segments = info
            .edges
            .iter()
            .map(|&edge| self.segment(edge))
            .collect::<Option<Vec<_>>>()?;

        Some(RouteResult {
            total_time: info.weight.map_or(0.0, |weight| weight.time),
            segments,
        })
    }

    pub fn catalogue(&self) -> &TransitCatalogue {
        &self.catalogue
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    fn wait_only_route(&self, stop: StopId) -> RouteResult {
        let wait = RouteWeight::wait(stop, self.settings.bus_wait_time);
        RouteResult {
            total_time: wait.time,
            segments: self.describe(&wait).into_iter().collect(),
        }
    }

    fn segment(&self, edge: EdgeIndex) -> Option<RouteSegment> {
        self.describe(self.graph.inner().edge_weight(edge)?)
    }

    fn describe(&self, weight: &RouteWeight) -> Option<RouteSegment> {
        let segment = match weight.kind {
            EdgeKind::Wait { stop } => RouteSegment::Wait {
                stop_name: self.catalogue.stop_by_id(stop)?.name.clone(),
                time: weight.time,
            },
            EdgeKind::Ride { bus, span_count } => RouteSegment::Ride {
                bus_name: self.catalogue.bus_by_id(bus)?.name.clone(),
                span_count,
                time: weight.time,
            },
        };
        Some(segment)
    }
}
