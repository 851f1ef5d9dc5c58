//! Data model of the transit network
//!
//! Contains the catalogue of stops and buses and the model that pairs it
//! with a routing graph.

pub mod catalogue;
pub mod stats;
pub mod transit_model;
pub mod types;

pub use catalogue::TransitCatalogue;
pub use stats::BusStats;
pub use transit_model::TransitModel;
pub use types::{Bus, Stop};
