//! Bus statistics derived from the catalogue

use geo::{Distance, Haversine};
use hashbrown::HashSet;
use itertools::Itertools;
use serde::Serialize;

use super::catalogue::TransitCatalogue;
use super::types::Bus;

/// Summary of a single bus route
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BusStats {
    /// Stops on the travelled route, counting repeats
    pub stop_count: usize,
    /// Distinct stops on the route
    pub unique_stop_count: usize,
    /// Road length of the route in meters
    pub route_length: u64,
    /// Great-circle length of the route in meters
    pub geographic_length: f64,
    /// Ratio of road length to great-circle length
    pub curvature: f64,
}

impl BusStats {
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(catalogue: &TransitCatalogue, bus: &Bus) -> Self {
        let route: Vec<_> = bus.route().collect();

        let mut route_length = 0_u64;
        let mut geographic_length = 0.0;
        for (from, to) in route.iter().copied().tuple_windows() {
            route_length += u64::from(catalogue.distance(from, to));
            geographic_length += Haversine.distance(
                catalogue.stops()[from].geometry,
                catalogue.stops()[to].geometry,
            );
        }

        // Zero-length geometry has nothing to bend
        let curvature = if geographic_length > 0.0 {
            route_length as f64 / geographic_length
        } else {
            if route.len() > 1 {
                log::warn!("Bus {:?} has all stops at the same location", bus.name);
            }
            1.0
        };

        Self {
            stop_count: route.len(),
            unique_stop_count: route.iter().collect::<HashSet<_>>().len(),
            route_length,
            geographic_length,
            curvature,
        }
    }
}

impl TransitCatalogue {
    /// Statistics for the named bus, `None` if there is no such bus
    pub fn bus_stats(&self, bus_name: &str) -> Option<BusStats> {
        self.bus(bus_name).map(|bus| BusStats::compute(self, bus))
    }
}
