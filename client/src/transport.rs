use anyhow::{Context, Result};
use reqwest::header::ACCEPT;

use crate::ClientConfig;

/// Source of raw resource bodies
pub trait Transport {
    /// Fetch the body at `url`, failing on anything but a success status
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?
            .error_for_status()
            .context("Unexpected HTTP status")?;

        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        Ok(body.to_vec())
    }
}
