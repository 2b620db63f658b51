use retrace_gtfs::schedule::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("transaction log is not valid UTF-8: {source}")]
    InvalidEncodingError {
        #[from]
        source: std::str::Utf8Error,
    },
    #[error("failure loading schedule catalog: {source}")]
    CatalogError {
        #[from]
        source: CatalogError,
    },
    #[error("failure building text pattern: {source}")]
    PatternError {
        #[from]
        source: regex::Error,
    },
    #[error("failure reading transaction log {path}: {source}")]
    LogReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure loading asset: {0}")]
    AssetError(String),
    #[error("failure encoding report image: {source}")]
    ImageEncodeError { source: image::ImageError },
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid report options: {0}")]
    InvalidOptionsError(String),
    #[error("{0}")]
    BatchError(String),
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
}
