use log::info;

use super::config::TransitModelConfig;
use super::json::{CatalogueDocument, catalogue_from_requests, load_document};
use crate::{Error, TransitModel};

/// Creates a transit model based on the provided configuration
///
/// # Errors
///
/// Returns an error if the document cannot be read, references unknown
/// stops, or carries invalid routing settings
pub fn create_transit_model(config: &TransitModelConfig) -> Result<TransitModel, Error> {
    info!(
        "Loading transit catalogue from {}",
        config.input_path.display()
    );
    let document = load_document(&config.input_path)?;
    transit_model_from_document(&document)
}

/// Builds a transit model from an already parsed document
///
/// # Errors
///
/// Returns an error if the document references unknown stops or carries
/// invalid routing settings
pub fn transit_model_from_document(document: &CatalogueDocument) -> Result<TransitModel, Error> {
    // Settings are checked before any population work is done
    document.routing_settings.validate()?;

    let catalogue = catalogue_from_requests(&document.base_requests)?;
    let model = TransitModel::new(catalogue, document.routing_settings)?;

    info!("Transit model created successfully");
    Ok(model)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::loading::json::parse_document;

    const DOCUMENT: &str = r#"{
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
             "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.01,
             "road_distances": {"C": 1000}},
            {"type": "Stop", "name": "C", "latitude": 0.0, "longitude": 0.02},
            {"type": "Bus", "name": "1", "stops": ["A", "B", "C"], "is_roundtrip": true}
        ],
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40}
    }"#;

    #[test]
    fn model_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let model = create_transit_model(&TransitModelConfig {
            input_path: file.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(model.stop_count(), 3);
        assert_eq!(model.bus_count(), 1);
        let route = model.find_route("A", "C").unwrap();
        assert!((route.total_time - 9.0).abs() < 1e-9);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = create_transit_model(&TransitModelConfig {
            input_path: "/definitely/not/here.json".into(),
        })
        .unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("not/here.json"));
    }

    #[test]
    fn malformed_file_is_invalid_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"base_requests\": [").unwrap();

        let err = create_transit_model(&TransitModelConfig {
            input_path: file.path().to_path_buf(),
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn invalid_settings_are_rejected_before_building() {
        let document =
            parse_document(&DOCUMENT.replace("\"bus_velocity\": 40", "\"bus_velocity\": 0"))
                .unwrap();
        let err = transit_model_from_document(&document).unwrap_err();
        assert!(matches!(err, Error::InvalidRouteSettings(_)));
    }
}
