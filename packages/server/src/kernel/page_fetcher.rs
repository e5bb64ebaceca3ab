//! Plain HTTP page fetcher.
//!
//! One GET per call, raw body returned as-is (no JavaScript rendering, no
//! HTML cleanup). No request timeout is set: a hung upstream blocks the
//! scrape until the platform gives up.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use tracing::{debug, warn};

use super::BasePageFetcher;

/// Fetch pages with reqwest
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        // Use a browser-like User-Agent to avoid bot detection
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Page request failed");
                e
            })
            .context("Failed to fetch URL")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "Failed to fetch URL: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );
        }

        response
            .text()
            .await
            .context("Failed to read response body")
    }
}
