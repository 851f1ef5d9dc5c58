use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::raw_types::CatalogueDocument;
use crate::Error;

/// Reads the input document from a JSON file
pub fn load_document(path: &Path) -> Result<CatalogueDocument, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        Error::InvalidData(format!("Failed to parse '{}': {}", path.display(), e))
    })
}

/// Parses the input document from a JSON string
pub fn parse_document(json: &str) -> Result<CatalogueDocument, Error> {
    serde_json::from_str(json)
        .map_err(|e| Error::InvalidData(format!("Failed to parse document: {e}")))
}
