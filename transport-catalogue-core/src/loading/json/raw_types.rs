use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Meters, RoutingSettings, requests::StatRequest};

/// Top-level input document
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    pub routing_settings: RoutingSettings,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Catalogue population request
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road distances from this stop to its neighbours, meters
    #[serde(default)]
    pub road_distances: BTreeMap<String, Meters>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}
