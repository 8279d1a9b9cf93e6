use crate::config::Config;
use crate::error::Result;
use crate::fetch::{DocumentSource, HttpFetcher};
use crate::join::join_contacts;
use crate::parser::{build_social_index, parse_legislators, parse_social_media};
use crate::sort::sort_contacts;
use crate::types::ContactRow;
use crate::writer::write_contacts_file;
use std::path::PathBuf;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub output: PathBuf,
}

/// Runs the fetch, parse, join, sort and write steps for one contact list
pub struct ContactProcessor<S> {
    config: Config,
    source: S,
}

impl ContactProcessor<HttpFetcher> {
    /// Create a processor that downloads the datasets over HTTP
    pub fn from_config(config: Config) -> Result<Self> {
        let source = HttpFetcher::new(config.timeout)?;
        Ok(Self::new(config, source))
    }
}

impl<S: DocumentSource> ContactProcessor<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }

    /// Fetch both datasets and build the sorted contact rows
    pub fn collect(&self) -> Result<Vec<ContactRow>> {
        let legislators = parse_legislators(&self.source.fetch(&self.config.legislators_url)?)?;
        tracing::info!(count = legislators.len(), "Loaded current legislators");

        let social_records = parse_social_media(&self.source.fetch(&self.config.social_media_url)?)?;
        let social = build_social_index(social_records);
        tracing::info!(count = social.len(), "Loaded social media accounts");

        let mut rows = join_contacts(&legislators, &social, self.config.term_cutoff)?;
        sort_contacts(&mut rows);

        Ok(rows)
    }

    /// Build the contact list and write it to the configured output path
    pub fn run(&self) -> Result<RunSummary> {
        let rows = self.collect()?;
        write_contacts_file(&self.config.output_path, &rows)?;

        tracing::debug!(
            rows = rows.len(),
            output = %self.config.output_path.display(),
            "Wrote contact list"
        );

        Ok(RunSummary {
            rows: rows.len(),
            output: self.config.output_path.clone(),
        })
    }
}
