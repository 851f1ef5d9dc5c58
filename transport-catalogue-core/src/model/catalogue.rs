//! Transit catalogue: stops, buses and road distances between stops

use hashbrown::HashMap;
use itertools::Itertools;

use super::types::{Bus, Stop};
use crate::{BusId, Error, Meters, StopId};

/// Single source of truth for the transit network.
///
/// Stops and buses live in insertion-ordered arenas and are referenced
/// everywhere else by their index. The insertion order is stable and
/// determines the routing graph vertex layout.
#[derive(Debug, Clone, Default)]
pub struct TransitCatalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,
    buses: Vec<Bus>,
    bus_index: HashMap<String, BusId>,
    /// Directed road distances as recorded
    distances: HashMap<(StopId, StopId), Meters>,
    /// Buses passing through each stop
    stop_buses: Vec<Vec<BusId>>,
}

impl TransitCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stop and returns its id.
    ///
    /// Adding a stop that already exists with the same coordinates is a no-op
    /// returning the existing id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateStop`] if the name is taken by a stop with
    /// different coordinates.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<StopId, Error> {
        let stop = Stop::new(name, latitude, longitude);

        if let Some(&existing) = self.stop_index.get(&stop.name) {
            return if self.stops[existing].geometry == stop.geometry {
                Ok(existing)
            } else {
                Err(Error::DuplicateStop { name: stop.name })
            };
        }

        let stop_id = self.stops.len();
        self.stop_index.insert(stop.name.clone(), stop_id);
        self.stops.push(stop);
        self.stop_buses.push(Vec::new());
        Ok(stop_id)
    }

    /// Records the road distance from `from` to `to`, replacing any earlier value
    /// for the same ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStopReference`] if either stop is not in the catalogue.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: Meters) -> Result<(), Error> {
        let context = || format!("distance {from:?} -> {to:?}");
        let from_id = self.require_stop(from, context)?;
        let to_id = self.require_stop(to, context)?;
        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    /// Adds a bus over already known stops and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStopReference`] if any stop is missing and
    /// [`Error::DuplicateBus`] if the name is taken. The catalogue is left
    /// untouched in both cases.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, Error> {
        let name = name.into();
        if self.bus_index.contains_key(&name) {
            return Err(Error::DuplicateBus { name });
        }

        let stops = stops
            .iter()
            .map(|stop| self.require_stop(stop.as_ref(), || format!("bus {name:?}")))
            .collect::<Result<Vec<_>, _>>()?;

        if stops.len() < 2 {
            log::warn!(
                "Bus {name:?} has {} stop(s) and will not produce any rides",
                stops.len()
            );
        }

        let bus_id = self.buses.len();
        for &stop in stops.iter().unique() {
            self.stop_buses[stop].push(bus_id);
        }
        self.bus_index.insert(name.clone(), bus_id);
        self.buses.push(Bus {
            name,
            stops,
            is_roundtrip,
        });
        Ok(bus_id)
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id])
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn stop_by_id(&self, stop_id: StopId) -> Option<&Stop> {
        self.stops.get(stop_id)
    }

    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_id(name).map(|id| &self.buses[id])
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    pub fn bus_by_id(&self, bus_id: BusId) -> Option<&Bus> {
        self.buses.get(bus_id)
    }

    /// Road distance from `from` to `to`.
    ///
    /// Falls back to the reverse direction when only that one was recorded,
    /// and to zero when neither was.
    pub fn distance(&self, from: StopId, to: StopId) -> Meters {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// All stops in insertion order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Number of explicitly recorded directed distances
    pub fn distance_count(&self) -> usize {
        self.distances.len()
    }

    /// Names of buses passing through the stop, sorted and without duplicates.
    /// Returns `None` for an unknown stop.
    pub fn buses_for_stop(&self, stop_name: &str) -> Option<Vec<&str>> {
        let stop_id = self.stop_id(stop_name)?;
        Some(
            self.stop_buses[stop_id]
                .iter()
                .map(|&bus| self.buses[bus].name.as_str())
                .sorted_unstable()
                .collect(),
        )
    }

    fn require_stop(&self, name: &str, context: impl FnOnce() -> String) -> Result<StopId, Error> {
        self.stop_id(name).ok_or_else(|| Error::UnknownStopReference {
            stop: name.to_string(),
            context: context(),
        })
    }
}
