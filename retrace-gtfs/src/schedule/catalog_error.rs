use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read schedule table {path:?}: {source}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{table} line {line}: expected {expected} fields, found {found}")]
    FieldCountError {
        table: &'static str,
        line: usize,
        expected: String,
        found: usize,
    },
    #[error("{table} line {line}: invalid value '{value}' for field '{field}'")]
    InvalidFieldError {
        table: &'static str,
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("stop_times line {line}: trip id '{trip_id}' not found in trips table")]
    UnknownTripError { line: usize, trip_id: String },
    #[error("stop_times line {line}: stop id '{stop_id}' not found in stops table")]
    UnknownStopError { line: usize, stop_id: String },
    #[error("trip '{trip_id}' references route id '{route_id}' not found in routes table")]
    UnknownRouteError { trip_id: String, route_id: String },
    #[error("{0}")]
    ConfigurationError(String),
}
