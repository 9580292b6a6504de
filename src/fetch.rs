use anyhow::{Context, Result};
use tracing::debug;

use crate::config::ScrapeConfig;

/// HTTP collaborator. Owns the configured client; callers get page bodies
/// or an error, never retries.
pub struct PageFetcher {
    client: reqwest::Client,
    courtesy_delay: std::time::Duration,
}

impl PageFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            courtesy_delay: config.courtesy_delay,
        })
    }

    /// Fetch a page body, failing on transport errors and non-2xx statuses.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Request to {} returned an error status", url))?;
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {}", url))?;
        Ok(body)
    }

    /// Detail-page fetch, preceded by the courtesy delay so sequential
    /// candidate processing never hammers the site.
    pub async fn fetch_detail(&self, url: &str) -> Result<String> {
        tokio::time::sleep(self.courtesy_delay).await;
        self.fetch(url).await
    }
}
