//! Statistics requests answered against a built transit model

use serde::{Deserialize, Serialize};

use crate::{RouteResult, TransitModel, loading::CatalogueDocument};

/// Request identifier echoed back in the response
pub type RequestId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: RequestId, name: String },
    Stop { id: RequestId, name: String },
    Route { id: RequestId, from: String, to: String },
    /// Map rendering is not supported and is always answered with "not found"
    Map { id: RequestId },
    /// Any other request type, skipped without a response
    #[serde(other)]
    Unsupported,
}

impl StatRequest {
    /// Identifier to echo back, `None` for unsupported requests
    pub fn id(&self) -> Option<RequestId> {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => Some(*id),
            StatRequest::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: RequestId,
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: RequestId,
        buses: Vec<String>,
    },
    Route {
        request_id: RequestId,
        #[serde(flatten)]
        route: RouteResult,
    },
    NotFound {
        request_id: RequestId,
        error_message: String,
    },
}

impl StatResponse {
    fn not_found(request_id: RequestId) -> Self {
        StatResponse::NotFound {
            request_id,
            error_message: "not found".to_string(),
        }
    }
}

impl TransitModel {
    /// Answers requests in order, skipping unsupported ones
    pub fn handle_stat_requests(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests
            .iter()
            .filter_map(|request| self.handle_stat_request(request))
            .collect()
    }

    /// Answers the stat requests carried by the document the model was built from
    pub fn handle_document_requests(&self, document: &CatalogueDocument) -> Vec<StatResponse> {
        self.handle_stat_requests(&document.stat_requests)
    }

    /// Response to a single request, `None` for an unsupported request type
    pub fn handle_stat_request(&self, request: &StatRequest) -> Option<StatResponse> {
        let request_id = request.id()?;
        let response = match request {
            StatRequest::Bus { name, .. } => self
                .bus_stats(name)
                .filter(|stats| stats.stop_count > 0)
                .map(|stats| StatResponse::Bus {
                    request_id,
                    curvature: stats.curvature,
                    route_length: stats.route_length,
                    stop_count: stats.stop_count,
                    unique_stop_count: stats.unique_stop_count,
                }),
            StatRequest::Stop { name, .. } => {
                self.buses_for_stop(name).map(|buses| StatResponse::Stop {
                    request_id,
                    buses: buses.into_iter().map(str::to_string).collect(),
                })
            }
            StatRequest::Route { from, to, .. } => self
                .find_route(from, to)
                .map(|route| StatResponse::Route { request_id, route }),
            StatRequest::Map { .. } | StatRequest::Unsupported => None,
        };
        Some(response.unwrap_or_else(|| StatResponse::not_found(request_id)))
    }
}
