use serde::{Deserialize, Serialize};

use crate::{de, FieldSpec, PartialRecord};

/// An event as curated in the admin console.
///
/// Dates are ISO `YYYY-MM-DD` strings and are not validated. `format` is one
/// of "in-person", "virtual" or "hybrid" by convention only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "de::required_text")]
    pub title: String,
    #[serde(default, deserialize_with = "de::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub event_date: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub event_time: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub cost: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub organizer: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub source_url: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "de::tags")]
    pub tags: Vec<String>,
}

impl EventRecord {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "The event title"),
        FieldSpec::new("description", "A detailed description of the event"),
        FieldSpec::new(
            "event_date",
            "The event date in YYYY-MM-DD format if available",
        ),
        FieldSpec::new("event_time", "The event time if available"),
        FieldSpec::new(
            "end_date",
            "The end date if it's a multi-day event in YYYY-MM-DD format",
        ),
        FieldSpec::new("location", "The full location string"),
        FieldSpec::new("address", "Street address"),
        FieldSpec::new("city", "City name"),
        FieldSpec::new("state", "State/province"),
        FieldSpec::new("country", "Country name"),
        FieldSpec::new("postal_code", "Postal/ZIP code"),
        FieldSpec::new("venue", "Venue name"),
        FieldSpec::new("format", "\"in-person\", \"virtual\", or \"hybrid\""),
        FieldSpec::new("cost", "The cost (e.g., \"Free\", \"$25\", \"$10-$50\")"),
        FieldSpec::new("organizer", "The organizer/host name"),
        FieldSpec::new(
            "category",
            "Event category (e.g., \"networking\", \"workshop\", \"conference\")",
        ),
        FieldSpec::new("image_url", "The URL of the event image if available"),
        FieldSpec::new("source_url", "The URL of the page being analyzed"),
        FieldSpec::new(
            "slug",
            "A URL-friendly slug based on the title (lowercase, hyphens, no special chars)",
        ),
        FieldSpec::new("tags", "An array of relevant tags"),
    ];

    /// Build a typed event from a partial record. Unknown keys are ignored,
    /// missing keys take their empty value.
    pub fn from_partial(partial: &PartialRecord) -> serde_json::Result<Self> {
        serde_json::from_value(serde_json::Value::Object(partial.clone()))
    }
}
