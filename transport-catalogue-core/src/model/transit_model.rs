use std::sync::Arc;

use super::{BusStats, TransitCatalogue};
use crate::{Error, RouteResult, RoutingSettings, TransportRouter};

/// Catalogue together with the routing graph built from it
#[derive(Debug, Clone)]
pub struct TransitModel {
    catalogue: Arc<TransitCatalogue>,
    router: TransportRouter,
}

impl TransitModel {
    /// Builds the routing graph for a fully populated catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRouteSettings`] if the settings are out of range.
    pub fn new(catalogue: TransitCatalogue, settings: RoutingSettings) -> Result<Self, Error> {
        let catalogue = Arc::new(catalogue);
        let router = TransportRouter::new(Arc::clone(&catalogue), settings)?;
        Ok(Self { catalogue, router })
    }

    pub fn catalogue(&self) -> &TransitCatalogue {
        &self.catalogue
    }

    pub fn router(&self) -> &TransportRouter {
        &self.router
    }

    pub fn stop_count(&self) -> usize {
        self.catalogue.stop_count()
    }

    pub fn bus_count(&self) -> usize {
        self.catalogue.bus_count()
    }

    pub fn find_route(&self, from: &str, to: &str) -> Option<RouteResult> {
        self.router.build_route(from, to)
    }

    pub fn bus_stats(&self, bus_name: &str) -> Option<BusStats> {
        self.catalogue.bus_stats(bus_name)
    }

    pub fn buses_for_stop(&self, stop_name: &str) -> Option<Vec<&str>> {
        self.catalogue.buses_for_stop(stop_name)
    }

    pub fn summary(&self) -> String {
        format!(
            "TransitModel with {} stops, {} buses and {} routing edges",
            self.stop_count(),
            self.bus_count(),
            self.router.graph().edge_count()
        )
    }
}
