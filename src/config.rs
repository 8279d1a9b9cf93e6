use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

/// Upstream location of the current legislators dataset
pub const DEFAULT_LEGISLATORS_URL: &str =
    "https://raw.githubusercontent.com/unitedstates/congress-legislators/main/legislators-current.yaml";

/// Upstream location of the social media dataset
pub const DEFAULT_SOCIAL_MEDIA_URL: &str =
    "https://raw.githubusercontent.com/unitedstates/congress-legislators/main/legislators-social-media.yaml";

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "congressional_contacts.csv";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_LEGISLATORS_URL: &str = "CONGRESS_CONTACTS_LEGISLATORS_URL";
pub const ENV_SOCIAL_MEDIA_URL: &str = "CONGRESS_CONTACTS_SOCIAL_MEDIA_URL";
pub const ENV_OUTPUT: &str = "CONGRESS_CONTACTS_OUTPUT";
pub const ENV_TIMEOUT_SECS: &str = "CONGRESS_CONTACTS_TIMEOUT_SECS";
pub const ENV_TERM_CUTOFF: &str = "CONGRESS_CONTACTS_TERM_CUTOFF";

/// Configuration for a contact list run
#[derive(Debug, Clone)]
pub struct Config {
    pub legislators_url: String,
    pub social_media_url: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
    /// Legislators whose last term ended before this date are left out
    pub term_cutoff: Option<NaiveDate>,
}

impl Config {
    /// Create a configuration pointing at the upstream datasets
    pub fn new() -> Self {
        Self {
            legislators_url: DEFAULT_LEGISLATORS_URL.to_string(),
            social_media_url: DEFAULT_SOCIAL_MEDIA_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            term_cutoff: None,
        }
    }

    /// Build a configuration from the process environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut builder = ConfigBuilder::new();

        if let Some(url) = var(ENV_LEGISLATORS_URL) {
            builder = builder.legislators_url(url);
        }
        if let Some(url) = var(ENV_SOCIAL_MEDIA_URL) {
            builder = builder.social_media_url(url);
        }
        if let Some(path) = var(ENV_OUTPUT) {
            builder = builder.output_path(path);
        }
        if let Some(secs) = var(ENV_TIMEOUT_SECS) {
            builder = builder.timeout_secs_str(&secs)?;
        }
        if let Some(cutoff) = var(ENV_TERM_CUTOFF) {
            builder = builder.term_cutoff_str(&cutoff)?;
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("legislators", &self.legislators_url),
            ("social media", &self.social_media_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::Config(format!(
                    "The {} URL must use http or https: {}",
                    name, url
                )));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(Error::Config("Output path is empty".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(Error::Config("Timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    pub fn legislators_url(mut self, url: impl Into<String>) -> Self {
        self.config.legislators_url = url.into();
        self
    }

    pub fn social_media_url(mut self, url: impl Into<String>) -> Self {
        self.config.social_media_url = url.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout from a number of seconds given as text
    pub fn timeout_secs_str(mut self, secs: &str) -> Result<Self> {
        let secs: u64 = secs.trim().parse().map_err(|_| {
            Error::Config(format!(
                "Invalid timeout '{}'. Expected a whole number of seconds",
                secs
            ))
        })?;
        self.config.timeout = Duration::from_secs(secs);
        Ok(self)
    }

    pub fn term_cutoff(mut self, cutoff: NaiveDate) -> Self {
        self.config.term_cutoff = Some(cutoff);
        self
    }

    /// Set the term cutoff from a YYYY-MM-DD string
    pub fn term_cutoff_str(mut self, cutoff: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(cutoff.trim(), "%Y-%m-%d").map_err(|_| {
            Error::Config(format!(
                "Invalid term cutoff '{}'. Expected YYYY-MM-DD",
                cutoff
            ))
        })?;
        self.config.term_cutoff = Some(date);
        Ok(self)
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
