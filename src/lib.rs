//! Builds a CSV contact list of the current members of Congress.
//!
//! The legislators and social media datasets published by the
//! `unitedstates/congress-legislators` project are downloaded, joined on the
//! bioguide ID, sorted by state and district, and written as one CSV file.

pub mod config;
pub mod error;
pub mod fetch;
pub mod join;
pub mod logging;
pub mod parser;
pub mod processor;
pub mod sort;
pub mod states;
pub mod types;
pub mod writer;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fetch::{DocumentSource, HttpFetcher};
pub use processor::{ContactProcessor, RunSummary};
pub use types::{ContactRow, District, Legislator, SocialHandles, SocialIndex, SocialMediaRecord};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::fetch::{DocumentSource, HttpFetcher};
    pub use crate::processor::{ContactProcessor, RunSummary};
    pub use crate::types::{ContactRow, District};
}
