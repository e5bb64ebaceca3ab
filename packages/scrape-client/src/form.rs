//! Form state for the record editor and the auto-fill tool's view-model.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use records::{EventRecord, OpportunityRecord, PartialRecord, RecordKind};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::FormError;
use crate::{RequestError, ScrapeClient};

/// Length of the content hash stored with a saved record.
const CONTENT_HASH_LEN: usize = 64;

// =============================================================================
// Form state
// =============================================================================

/// The record being edited, as a JSON object keyed by field name.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    kind: RecordKind,
    fields: PartialRecord,
}

impl FormState {
    /// Blank form: every field of `kind` present and empty.
    pub fn new(kind: RecordKind) -> Self {
        let blank = match kind {
            RecordKind::Event => serde_json::to_value(EventRecord::default()),
            RecordKind::Opportunity => serde_json::to_value(OpportunityRecord::default()),
        };
        let mut fields = match blank {
            Ok(Value::Object(fields)) => fields,
            _ => PartialRecord::new(),
        };
        // Both editors keep the page the record came from.
        fields.entry("source_url").or_insert(Value::Null);

        Self { kind, fields }
    }

    pub fn from_fields(kind: RecordKind, fields: PartialRecord) -> Self {
        Self { kind, fields }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn fields(&self) -> &PartialRecord {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Overwrite fields from a partial record.
    ///
    /// Only keys present with a non-null value are written; `null` and
    /// absent keys leave the current value alone. Returns the keys written.
    pub fn merge(&mut self, partial: &PartialRecord) -> Vec<String> {
        let mut updated = Vec::new();
        for (key, value) in partial {
            if value.is_null() {
                continue;
            }
            self.fields.insert(key.clone(), value.clone());
            updated.push(key.clone());
        }
        updated
    }

    /// The object to persist: the kind's fields with empty strings and empty
    /// tag lists turned into `null`, plus `source_url` and `content_hash`.
    pub fn save_payload(&self) -> Result<PartialRecord, FormError> {
        let typed = match self.kind {
            RecordKind::Event => serde_json::to_value(EventRecord::from_partial(&self.fields)?)?,
            RecordKind::Opportunity => {
                serde_json::to_value(OpportunityRecord::from_partial(&self.fields)?)?
            }
        };

        let Value::Object(mut payload) = typed else {
            return Ok(PartialRecord::new());
        };

        let title = payload
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }

        for value in payload.values_mut() {
            let empty = match value {
                Value::String(s) => s.is_empty(),
                Value::Array(items) => items.is_empty(),
                _ => false,
            };
            if empty {
                *value = Value::Null;
            }
        }

        let source_url = self
            .fields
            .get("source_url")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty());
        payload.insert(
            "source_url".to_string(),
            source_url.map_or(Value::Null, |s| Value::String(s.to_string())),
        );
        payload.insert(
            "content_hash".to_string(),
            Value::String(content_hash(source_url.unwrap_or_default(), &title)),
        );

        Ok(payload)
    }
}

/// Base64 of `"{source_url}-{title}"`, cut to 64 characters.
///
/// Text that fits in Latin-1 is encoded one byte per character, so hashes
/// match the ones the browser editor computes with `btoa`. Anything wider
/// (which `btoa` rejects) is encoded as UTF-8.
pub fn content_hash(source_url: &str, title: &str) -> String {
    let text = format!("{}-{}", source_url, title);
    let bytes = text
        .chars()
        .map(u8::try_from)
        .collect::<Result<Vec<u8>, _>>()
        .unwrap_or_else(|_| text.clone().into_bytes());

    let mut hash = STANDARD.encode(bytes);
    hash.truncate(CONTENT_HASH_LEN);
    hash
}

// =============================================================================
// Auto-fill tool
// =============================================================================

/// Result of one press of "Scrape & Fill".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// The form was updated; these keys changed
    Filled { updated: Vec<String> },
    /// Nothing changed; `message` is shown to the editor
    Failed { message: String },
    /// A request was already in flight
    Busy,
}

/// Local state of the auto-fill tool: URL input, loading flag, last error.
#[derive(Debug, Clone)]
pub struct ScrapeForm {
    kind: RecordKind,
    url: String,
    loading: bool,
    error: Option<String>,
}

impl ScrapeForm {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            url: String::new(),
            loading: false,
            error: None,
        }
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.url.trim().is_empty()
    }

    /// Enter the loading state. Returns the URL to request, or `None` when
    /// the submission is refused (already loading, or blank URL).
    pub fn begin(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        if self.url.trim().is_empty() {
            self.error = Some(RequestError::EmptyUrl.to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        Some(self.url.clone())
    }

    /// Leave the loading state with the request's result, merging a record
    /// into `form` on success.
    pub fn finish(
        &mut self,
        result: Result<PartialRecord, RequestError>,
        form: &mut FormState,
    ) -> ScrapeOutcome {
        self.loading = false;

        match result {
            Ok(record) => {
                let updated = form.merge(&record);
                info!(kind = %self.kind, fields = updated.len(), "Form auto-filled");
                self.url.clear();
                ScrapeOutcome::Filled { updated }
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "Auto-fill failed");
                self.error = Some(message.clone());
                ScrapeOutcome::Failed { message }
            }
        }
    }

    /// Run one scrape and merge the result into `form`.
    pub async fn submit(&mut self, client: &ScrapeClient, form: &mut FormState) -> ScrapeOutcome {
        if self.loading {
            return ScrapeOutcome::Busy;
        }
        let Some(url) = self.begin() else {
            return ScrapeOutcome::Failed {
                message: self.error.clone().unwrap_or_default(),
            };
        };

        let result = client.request_extraction(&url, self.kind).await;
        self.finish(result, form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn partial(value: Value) -> PartialRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_new_form_has_every_field() {
        let form = FormState::new(RecordKind::Event);
        for field in EventRecord::FIELDS {
            assert!(form.get(field.name).is_some(), "missing {}", field.name);
        }

        let form = FormState::new(RecordKind::Opportunity);
        assert!(form.get("type").is_some());
        assert_eq!(form.get("source_url"), Some(&Value::Null));
    }

    #[test]
    fn test_merge_skips_null_and_absent() {
        let mut form = FormState::new(RecordKind::Event);
        form.set("title", json!("Hand-typed title"));
        form.set("city", json!("St. Paul"));

        let updated = form.merge(&partial(json!({
            "title": null,
            "venue": "Riverside Center",
            "source_url": "https://example.org/gala"
        })));

        assert_eq!(form.get("title"), Some(&json!("Hand-typed title")));
        assert_eq!(form.get("city"), Some(&json!("St. Paul")));
        assert_eq!(form.get("venue"), Some(&json!("Riverside Center")));
        assert_eq!(updated.len(), 2);
        assert!(!updated.contains(&"title".to_string()));
    }

    #[test]
    fn test_save_payload_nulls_empty_values() {
        let mut form = FormState::new(RecordKind::Event);
        form.merge(&partial(json!({
            "title": "Spring Gala",
            "description": "",
            "source_url": "https://example.org/gala"
        })));

        let payload = form.save_payload().unwrap();

        assert_eq!(payload["title"], json!("Spring Gala"));
        assert_eq!(payload["description"], Value::Null);
        assert_eq!(payload["tags"], Value::Null);
        assert_eq!(payload["source_url"], json!("https://example.org/gala"));
        assert_eq!(
            payload["content_hash"],
            json!(content_hash("https://example.org/gala", "Spring Gala"))
        );
    }

    #[test]
    fn test_save_payload_requires_title() {
        let form = FormState::new(RecordKind::Opportunity);
        assert!(matches!(form.save_payload(), Err(FormError::MissingTitle)));
    }

    #[test]
    fn test_opportunity_payload_keeps_source_url() {
        let mut form = FormState::new(RecordKind::Opportunity);
        form.merge(&partial(json!({
            "title": "Grant Writer",
            "type": "job",
            "tags": ["writing"],
            "source_url": "https://example.org/jobs/7"
        })));

        let payload = form.save_payload().unwrap();
        assert_eq!(payload["type"], json!("job"));
        assert_eq!(payload["tags"], json!(["writing"]));
        assert_eq!(payload["source_url"], json!("https://example.org/jobs/7"));
    }

    #[test]
    fn test_content_hash() {
        assert_eq!(content_hash("", "Gala"), "LUdhbGE=");
        let long = content_hash(&"https://example.org/".repeat(10), "Gala");
        assert_eq!(long.len(), 64);
    }

    #[test]
    fn test_content_hash_latin1_title() {
        // btoa("-é") in the browser
        assert_eq!(content_hash("", "é"), "Lek=");
        // Outside Latin-1 falls back to UTF-8 bytes
        assert_eq!(content_hash("", "Café ☕"), "LUNhZsOpIOKYlQ==");
    }

    #[test]
    fn test_begin_refuses_blank_url() {
        let mut tool = ScrapeForm::new(RecordKind::Event);
        tool.set_url("  ");

        assert!(!tool.can_submit());
        assert!(tool.begin().is_none());
        assert_eq!(tool.error(), Some("Please enter a URL"));
        assert!(!tool.is_loading());
    }

    #[test]
    fn test_begin_refuses_while_loading() {
        let mut tool = ScrapeForm::new(RecordKind::Event);
        tool.set_url("https://example.org/gala");

        assert_eq!(tool.begin().as_deref(), Some("https://example.org/gala"));
        assert!(tool.is_loading());
        assert!(!tool.can_submit());
        assert!(tool.begin().is_none());
    }

    #[test]
    fn test_finish_success_clears_url_and_merges() {
        let mut tool = ScrapeForm::new(RecordKind::Event);
        let mut form = FormState::new(RecordKind::Event);
        tool.set_url("https://example.org/gala");
        tool.begin();

        let outcome = tool.finish(Ok(partial(json!({ "title": "Gala" }))), &mut form);

        assert_eq!(
            outcome,
            ScrapeOutcome::Filled {
                updated: vec!["title".to_string()]
            }
        );
        assert!(!tool.is_loading());
        assert_eq!(tool.url(), "");
        assert!(tool.error().is_none());
        assert_eq!(form.get("title"), Some(&json!("Gala")));
    }

    #[test]
    fn test_finish_failure_leaves_form_untouched() {
        let mut tool = ScrapeForm::new(RecordKind::Opportunity);
        let mut form = FormState::new(RecordKind::Opportunity);
        let before = form.clone();
        tool.set_url("https://example.org/jobs/1");
        tool.begin();

        let outcome = tool.finish(
            Err(RequestError::Service {
                status: 500,
                message: "Failed to parse extracted data".to_string(),
            }),
            &mut form,
        );

        assert_eq!(
            outcome,
            ScrapeOutcome::Failed {
                message: "Failed to parse extracted data".to_string()
            }
        );
        assert_eq!(form, before);
        assert!(!tool.is_loading());
        assert_eq!(tool.url(), "https://example.org/jobs/1");
        assert_eq!(tool.error(), Some("Failed to parse extracted data"));
    }
}
