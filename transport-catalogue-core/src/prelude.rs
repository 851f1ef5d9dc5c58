// Re-export key components
pub use crate::loading::{
    CatalogueDocument, RoutingSettings, TransitModelConfig, create_transit_model,
};
pub use crate::model::{Bus, BusStats, Stop, TransitCatalogue, TransitModel};
pub use crate::requests::{StatRequest, StatResponse};
pub use crate::routing::{
    PathWeight, RouteInfo, RouteResult, RouteSegment, RouteWeight, Router, TransitGraph,
    TransportRouter,
};

pub use crate::Error;

// Core handle types
pub use crate::BusId;
pub use crate::EdgeId;
pub use crate::Meters;
pub use crate::Minutes; // bus_wait_time units
pub use crate::StopId;
pub use crate::VertexId;
