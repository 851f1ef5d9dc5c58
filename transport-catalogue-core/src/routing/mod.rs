// Wait/ride graph construction and fastest-route queries

mod batch;
pub mod dijkstra;
pub mod graph;
pub mod transport_router;
pub mod weight;

pub use dijkstra::{RouteInfo, Router};
pub use graph::{StopVertices, TransitGraph};
pub use transport_router::{RouteResult, RouteSegment, TransportRouter};
pub use weight::{EdgeKind, PathWeight, RouteWeight};
