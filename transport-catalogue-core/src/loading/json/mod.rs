//! Reading the JSON input document into a catalogue

mod parser;
mod processor;
mod raw_types;

pub use parser::{load_document, parse_document};
pub use processor::catalogue_from_requests;
pub use raw_types::{BaseRequest, BusRequest, CatalogueDocument, StopRequest};
