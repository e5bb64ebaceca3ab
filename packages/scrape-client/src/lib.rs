//! Client for the scrape service's `POST /api/scrape` endpoint.
//!
//! The editor uses this to auto-fill an event or opportunity form from a
//! URL: [`ScrapeClient`] makes the call, [`ScrapeForm`] tracks the tool's
//! own loading/error state, and [`FormState`] merges the result into the
//! record being edited.
//!
//! # Example
//!
//! ```rust,ignore
//! use records::RecordKind;
//! use scrape_client::{FormState, ScrapeClient, ScrapeForm};
//!
//! let client = ScrapeClient::new("http://localhost:3001");
//! let mut form = FormState::new(RecordKind::Event);
//! let mut tool = ScrapeForm::new(RecordKind::Event);
//!
//! tool.set_url("https://example.org/events/gala");
//! let outcome = tool.submit(&client, &mut form).await;
//! ```

pub mod error;
pub mod form;

pub use error::{FormError, RequestError, Result};
pub use form::{FormState, ScrapeForm, ScrapeOutcome};

use records::wire::SCRAPE_FAILED;
use records::{PartialRecord, RecordKind, ScrapeRequest};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Where the scrape service listens in local development.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3001";

#[derive(Clone)]
pub struct ScrapeClient {
    http_client: Client,
    base_url: String,
}

impl ScrapeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service to extract a `kind` record from `url`.
    ///
    /// Exactly one request, never retried. Any failure comes back as an
    /// `Err` whose message is fit to show the editor.
    pub async fn request_extraction(&self, url: &str, kind: RecordKind) -> Result<PartialRecord> {
        let url = url.trim();
        if url.is_empty() {
            return Err(RequestError::EmptyUrl);
        }

        debug!(url = %url, kind = %kind, "Requesting extraction");

        let response = self
            .http_client
            .post(format!("{}/api/scrape", self.base_url))
            .json(&ScrapeRequest::new(url, kind))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Scrape service unreachable");
                RequestError::Network(e.to_string())
            })?;

        let status = response.status();
        let body: Option<Value> = response.json().await.ok();

        // A record may carry its own `"error": null`; only a set value fails
        let failed = !status.is_success()
            || body
                .as_ref()
                .and_then(|b| b.get("error"))
                .is_some_and(|e| !e.is_null());
        if failed {
            let message = body
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| SCRAPE_FAILED.to_string());
            warn!(status = %status, message = %message, "Scrape request failed");
            return Err(RequestError::Service {
                status: status.as_u16(),
                message,
            });
        }

        match body {
            Some(Value::Object(record)) => Ok(record),
            _ => Err(RequestError::InvalidResponse {
                status: status.as_u16(),
            }),
        }
    }
}

/// `details`, else `error`, from an error body.
fn error_message(body: &Value) -> Option<String> {
    ["details", "error"].iter().find_map(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}
