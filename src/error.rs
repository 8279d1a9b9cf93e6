use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to parse {document}")]
    Parse {
        document: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unknown state code '{code}' for legislator {bioguide}")]
    UnknownState { code: String, bioguide: String },

    #[error("Representative {bioguide} has no district in their current term")]
    MissingDistrict { bioguide: String },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
