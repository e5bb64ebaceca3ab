//! Pure Anthropic Messages API client
//!
//! A minimal client for single-turn text completions, with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use anthropic_client::{AnthropicClient, Message, MessagesRequest};
//!
//! let client = AnthropicClient::new("sk-ant-...");
//!
//! let completion = client
//!     .messages(
//!         MessagesRequest::new("claude-3-opus-20240229", 2000)
//!             .message(Message::user("Hello!")),
//!     )
//!     .await?;
//! println!("{}", completion.text);
//! ```

pub mod error;
pub mod types;

pub use error::{AnthropicError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// API version header sent with every request.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Pure Anthropic API client.
#[derive(Clone)]
pub struct AnthropicClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a Messages API request and return the first text block.
    ///
    /// No retries and no streaming: one request, one completion.
    pub async fn messages(&self, request: MessagesRequest) -> Result<Completion> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                AnthropicError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Anthropic API error");
            return Err(AnthropicError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let raw: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AnthropicError::Parse(e.to_string()))?;

        let text = raw
            .first_text()
            .ok_or(AnthropicError::EmptyCompletion)?
            .to_string();

        debug!(
            model = %request.model,
            stop_reason = ?raw.stop_reason,
            duration_ms = start.elapsed().as_millis(),
            "Anthropic completion"
        );

        Ok(Completion {
            text,
            stop_reason: raw.stop_reason,
            usage: raw.usage,
        })
    }
}
