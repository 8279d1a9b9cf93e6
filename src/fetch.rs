use crate::error::{Error, Result};
use std::time::Duration;

/// Anything that can hand back the raw text of a document by URL
pub trait DocumentSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches documents over HTTP with a single attempt per URL
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self { client })
    }
}

impl DocumentSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let network = |source: reqwest::Error| Error::Network {
            url: url.to_string(),
            source,
        };

        tracing::info!(url, "Downloading");
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(network)?;
        tracing::info!(url, bytes = body.len(), "Downloaded");

        Ok(body)
    }
}
