//! JSON bodies exchanged on `POST /api/scrape`.

use serde::{Deserialize, Serialize};

use crate::RecordKind;

/// Message for a request missing `url` or `type`.
pub const URL_AND_TYPE_REQUIRED: &str = "URL and type are required";

/// Top-level message for any failure after validation.
pub const SCRAPE_FAILED: &str = "Failed to scrape URL";

/// Top-level message when the LLM credential is missing.
pub const CONFIGURATION_ERROR: &str = "Server configuration error";

/// Request body. Both fields are optional on the wire so the service can
/// answer a missing field with its own validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            url: Some(url.into()),
            kind: Some(kind.as_str().to_string()),
        }
    }
}

/// Error body returned with any non-2xx status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Name of the failing step's error kind, e.g. "FetchError".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            kind: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}
