use log::info;

use super::raw_types::{BaseRequest, BusRequest, StopRequest};
use crate::{Error, TransitCatalogue};

/// Populates a catalogue from base requests.
///
/// Stops go first, then road distances, then buses, so a request may refer
/// to a stop declared later in the list. The first failing request aborts
/// the whole population.
pub fn catalogue_from_requests(requests: &[BaseRequest]) -> Result<TransitCatalogue, Error> {
    let stops: Vec<&StopRequest> = requests
        .iter()
        .filter_map(|request| match request {
            BaseRequest::Stop(stop) => Some(stop),
            BaseRequest::Bus(_) => None,
        })
        .collect();
    let buses: Vec<&BusRequest> = requests
        .iter()
        .filter_map(|request| match request {
            BaseRequest::Bus(bus) => Some(bus),
            BaseRequest::Stop(_) => None,
        })
        .collect();

    let mut catalogue = TransitCatalogue::new();

    for stop in &stops {
        catalogue.add_stop(stop.name.as_str(), stop.latitude, stop.longitude)?;
    }

    for stop in &stops {
        for (neighbour, &meters) in &stop.road_distances {
            catalogue.add_distance(&stop.name, neighbour, meters)?;
        }
    }

    for bus in &buses {
        catalogue.add_bus(bus.name.as_str(), &bus.stops, bus.is_roundtrip)?;
    }

    info!(
        "Loaded {} stops, {} road distances and {} buses",
        catalogue.stop_count(),
        catalogue.distance_count(),
        catalogue.bus_count()
    );
    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::json::parse_document;

    #[test]
    fn later_stops_can_be_referenced() {
        let document = parse_document(
            r#"{
                "base_requests": [
                    {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false},
                    {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                     "road_distances": {"B": 1200}},
                    {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.01}
                ],
                "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40}
            }"#,
        )
        .unwrap();

        let catalogue = catalogue_from_requests(&document.base_requests).unwrap();
        assert_eq!(catalogue.stop_count(), 2);
        assert_eq!(catalogue.bus("1").unwrap().stops, vec![0, 1]);
        assert_eq!(catalogue.distance(1, 0), 1200);
    }

    #[test]
    fn unknown_stop_aborts_population() {
        let document = parse_document(
            r#"{
                "base_requests": [
                    {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0},
                    {"type": "Bus", "name": "1", "stops": ["A", "Ghost"], "is_roundtrip": true}
                ],
                "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40}
            }"#,
        )
        .unwrap();

        let err = catalogue_from_requests(&document.base_requests).unwrap_err();
        assert!(matches!(err, Error::UnknownStopReference { stop, .. } if stop == "Ghost"));
    }

    #[test]
    fn distance_to_unknown_stop_aborts_population() {
        let document = parse_document(
            r#"{
                "base_requests": [
                    {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                     "road_distances": {"Ghost": 100}}
                ],
                "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40}
            }"#,
        )
        .unwrap();

        assert!(catalogue_from_requests(&document.base_requests).is_err());
    }
}
