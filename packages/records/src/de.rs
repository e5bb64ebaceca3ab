//! Lenient deserializers for model-produced values.
//!
//! Model output is untrusted: a postal code may come back as a number, a
//! tag list as `null`. These helpers coerce the common shapes instead of
//! rejecting the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Nullable free text. Numbers and booleans are stringified.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_text(Value::deserialize(deserializer)?))
}

/// Required text that tolerates `null` (becomes empty).
pub fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Ordered tag list. `null` becomes empty, a single string becomes a
/// one-element list, non-string entries are stringified.
pub fn tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().filter_map(scalar_to_text).collect(),
        other => scalar_to_text(other).into_iter().collect(),
    };
    Ok(tags)
}
