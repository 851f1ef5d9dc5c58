//! Catalogue entities - stops and buses

use geo::Point;

use crate::StopId;

/// Named bus stop
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique stop name
    pub name: String,
    /// Stop coordinates, `x` is longitude and `y` is latitude
    pub geometry: Point<f64>,
}

impl Stop {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            geometry: Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Bus route over catalogue stops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// Unique bus name
    pub name: String,
    /// Stops as declared, in travel order
    pub stops: Vec<StopId>,
    /// Closed loop, traversed once in the declared order
    pub is_roundtrip: bool,
}

impl Bus {
    /// Logical stop sequence actually travelled by the bus.
    ///
    /// A roundtrip bus yields its stops as declared. Any other bus drives the
    /// declared stops forward and then back again, visiting the turnaround
    /// stop only once: `[A, B, C]` becomes `A, B, C, B, A`.
    pub fn route(&self) -> impl Iterator<Item = StopId> + '_ {
        let backward = if self.is_roundtrip {
            &[][..]
        } else {
            &self.stops[..self.stops.len().saturating_sub(1)]
        };
        self.stops.iter().chain(backward.iter().rev()).copied()
    }

    /// Length of [`Bus::route`]
    pub fn route_len(&self) -> usize {
        if self.is_roundtrip || self.stops.is_empty() {
            self.stops.len()
        } else {
            self.stops.len() * 2 - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(stops: Vec<StopId>, is_roundtrip: bool) -> Bus {
        Bus {
            name: "1".to_string(),
            stops,
            is_roundtrip,
        }
    }

    #[test]
    fn roundtrip_route_is_declared_order() {
        let bus = bus(vec![0, 1, 2, 0], true);
        assert_eq!(bus.route().collect::<Vec<_>>(), vec![0, 1, 2, 0]);
        assert_eq!(bus.route_len(), 4);
    }

    #[test]
    fn linear_route_goes_there_and_back() {
        let bus = bus(vec![0, 1, 2], false);
        assert_eq!(bus.route().collect::<Vec<_>>(), vec![0, 1, 2, 1, 0]);
        assert_eq!(bus.route_len(), 5);
    }

    #[test]
    fn empty_and_single_stop_routes() {
        assert_eq!(bus(vec![], false).route().count(), 0);
        assert_eq!(bus(vec![], false).route_len(), 0);
        assert_eq!(bus(vec![3], false).route().collect::<Vec<_>>(), vec![3]);
        assert_eq!(bus(vec![3], false).route_len(), 1);
    }

    #[test]
    fn stop_coordinates_round_trip_through_point() {
        let stop = Stop::new("Marushkino", 55.595_884, 37.209_755);
        assert!((stop.latitude() - 55.595_884).abs() < f64::EPSILON);
        assert!((stop.longitude() - 37.209_755).abs() < f64::EPSILON);
    }
}
