//! This module is responsible for loading the input document
//! and building the transit model from it.

mod builder;
mod config;
pub mod json;

pub use builder::{create_transit_model, transit_model_from_document};
pub use config::{RoutingSettings, TransitModelConfig};
pub use json::CatalogueDocument;
