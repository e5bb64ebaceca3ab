//! Two-stage parser for model replies.
//!
//! Stage one parses the whole reply as JSON. Stage two takes the span from
//! the first `{` to the last `}` and parses that. The span match is greedy:
//! with several unrelated JSON fragments in one reply it captures everything
//! between them and usually fails to parse. It is a heuristic, not a
//! guarantee.

use lazy_static::lazy_static;
use records::PartialRecord;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    // First '{' through last '}', across newlines
    static ref JSON_SPAN: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// Which stage, if any, produced a record.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The whole reply was a JSON object
    Strict(PartialRecord),
    /// A JSON object was found inside surrounding text
    Extracted(PartialRecord),
    Failed,
}

impl ParseOutcome {
    pub fn stage(&self) -> &'static str {
        match self {
            ParseOutcome::Strict(_) => "strict",
            ParseOutcome::Extracted(_) => "extracted",
            ParseOutcome::Failed => "failed",
        }
    }

    pub fn into_record(self) -> Option<PartialRecord> {
        match self {
            ParseOutcome::Strict(record) | ParseOutcome::Extracted(record) => Some(record),
            ParseOutcome::Failed => None,
        }
    }
}

fn parse_object(text: &str) -> Option<PartialRecord> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Parse a model reply into a record.
pub fn parse_reply(reply: &str) -> ParseOutcome {
    if let Some(record) = parse_object(reply) {
        return ParseOutcome::Strict(record);
    }

    JSON_SPAN
        .find(reply)
        .and_then(|span| parse_object(span.as_str()))
        .map(ParseOutcome::Extracted)
        .unwrap_or(ParseOutcome::Failed)
}
