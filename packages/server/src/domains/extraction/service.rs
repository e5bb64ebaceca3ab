//! The scrape pipeline: fetch → prompt → complete → parse → stamp `source_url`.
//!
//! Single-shot. No step is retried and nothing is kept between requests.

use std::sync::Arc;

use records::wire::URL_AND_TYPE_REQUIRED;
use records::{PartialRecord, RecordKind, ScrapeRequest};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::errors::ExtractError;
use super::parsing::{parse_reply, ParseOutcome};
use super::prompts::{build_prompt, truncate_chars};
use crate::kernel::{BaseAI, BasePageFetcher};

/// Model used for extraction unless configured otherwise.
pub const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

/// Output token budget for one extraction.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Characters of page markup embedded in the prompt.
pub const DEFAULT_CONTENT_CHAR_LIMIT: usize = 15_000;

/// Detail message when no LLM credential is configured.
pub const MISSING_API_KEY: &str = "Anthropic API key not configured";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSettings {
    pub model: String,
    pub content_char_limit: usize,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            content_char_limit: DEFAULT_CONTENT_CHAR_LIMIT,
        }
    }
}

/// Validate a raw request body into a URL and record kind.
///
/// Missing or blank fields are reported before the kind is checked, and
/// neither check touches the network.
pub fn validate_request(request: &ScrapeRequest) -> Result<(String, RecordKind), ExtractError> {
    let url = request.url.as_deref().filter(|u| !u.trim().is_empty());
    let kind = request.kind.as_deref().filter(|k| !k.trim().is_empty());

    let (Some(url), Some(kind)) = (url, kind) else {
        return Err(ExtractError::Validation(URL_AND_TYPE_REQUIRED.to_string()));
    };

    let kind = kind
        .parse::<RecordKind>()
        .map_err(|_| ExtractError::Validation("type must be \"event\" or \"opportunity\"".into()))?;

    Ok((url.to_string(), kind))
}

/// Stateless extraction service.
///
/// `ai` is `None` when no credential is configured; each request then fails
/// with [`ExtractError::Configuration`] before any network call.
pub struct ExtractionService {
    fetcher: Arc<dyn BasePageFetcher>,
    ai: Option<Arc<dyn BaseAI>>,
    settings: ExtractionSettings,
}

impl ExtractionService {
    pub fn new(
        fetcher: Arc<dyn BasePageFetcher>,
        ai: Option<Arc<dyn BaseAI>>,
        settings: ExtractionSettings,
    ) -> Self {
        Self {
            fetcher,
            ai,
            settings,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.ai.is_some()
    }

    /// Validate a raw request body, then run [`Self::extract`].
    pub async fn handle(&self, request: &ScrapeRequest) -> Result<PartialRecord, ExtractError> {
        let (url, kind) = validate_request(request)?;
        self.extract(&url, kind).await
    }

    /// Extract a `kind` record from the page at `url`.
    ///
    /// The returned object is whatever the model produced, with `source_url`
    /// forced to `url`. Extra or missing keys are passed through.
    pub async fn extract(&self, url: &str, kind: RecordKind) -> Result<PartialRecord, ExtractError> {
        info!(kind = %kind, url = %url, "Starting scrape");

        let ai = self.ai.as_ref().ok_or_else(|| {
            warn!("LLM API key missing, refusing scrape");
            ExtractError::Configuration(MISSING_API_KEY.to_string())
        })?;

        let page = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| ExtractError::Fetch(format!("{:#}", e)))?;
        info!(url = %url, chars = page.chars().count(), "Fetched page");

        let prompt = build_prompt(kind, url, &page, self.settings.content_char_limit);
        debug!(prompt_chars = prompt.chars().count(), "Built extraction prompt");

        let reply = ai
            .complete_with_model(&prompt, Some(&self.settings.model))
            .await
            .map_err(|e| ExtractError::Model(format!("{:#}", e)))?;
        debug!(reply = %truncate_chars(&reply, 200), "Model reply received");

        let outcome = parse_reply(&reply);
        match &outcome {
            ParseOutcome::Strict(_) => debug!("Parsed reply as JSON"),
            ParseOutcome::Extracted(_) => info!("Reply was not bare JSON, used extracted object"),
            ParseOutcome::Failed => warn!("No JSON object found in model reply"),
        }

        let mut record = outcome.into_record().ok_or(ExtractError::Parse)?;
        record.insert("source_url".to_string(), Value::String(url.to_string()));

        info!(kind = %kind, url = %url, fields = record.len(), "Scrape complete");
        Ok(record)
    }
}
