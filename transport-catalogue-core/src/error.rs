use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown stop {stop:?} referenced by {context}")]
    UnknownStopReference { stop: String, context: String },
    #[error("Stop {name:?} already exists with different coordinates")]
    DuplicateStop { name: String },
    #[error("Bus {name:?} already exists")]
    DuplicateBus { name: String },
    #[error("Invalid routing settings: {0}")]
    InvalidRouteSettings(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
