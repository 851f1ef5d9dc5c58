//! Transit network routing engine
//!
//! Stores stops, buses and directional road distances, builds a
//! wait/ride graph on top of them and answers fastest-route queries
//! between named stops.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod requests;
pub mod routing;

pub use error::Error;
pub use loading::{RoutingSettings, TransitModelConfig, create_transit_model};
pub use model::{BusStats, TransitCatalogue, TransitModel};
pub use routing::{RouteResult, RouteSegment, TransportRouter};

/// Index of a stop in catalogue insertion order
pub type StopId = usize;
/// Index of a bus in catalogue insertion order
pub type BusId = usize;
/// Graph vertex handle, `2 * stop` for input and `2 * stop + 1` for output
pub type VertexId = usize;
/// Graph edge handle, assigned in insertion order
pub type EdgeId = usize;
/// Travel time in minutes
pub type Minutes = f64;
/// Road distance in meters
pub type Meters = u32;
