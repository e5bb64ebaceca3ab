use serde::{Deserialize, Serialize};

use crate::{de, FieldSpec, PartialRecord};

/// A job or volunteer opening as curated in the admin console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    #[serde(default, deserialize_with = "de::required_text")]
    pub title: String,
    #[serde(default, deserialize_with = "de::text")]
    pub description: Option<String>,
    /// "job" or "volunteer", inferred by the model.
    #[serde(rename = "type", default, deserialize_with = "de::text")]
    pub opportunity_type: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub organization: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub external_url: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub commitment: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub requirements: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub application_deadline: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub posted_date: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub compensation: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "de::tags")]
    pub tags: Vec<String>,
}

impl OpportunityRecord {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "The opportunity title"),
        FieldSpec::new("description", "A detailed description"),
        FieldSpec::new("type", "\"job\" or \"volunteer\" (infer from context)"),
        FieldSpec::new("organization", "The organization name"),
        FieldSpec::new(
            "location",
            "The location (physical address or \"Remote\")",
        ),
        FieldSpec::new("format", "\"remote\", \"in-person\", or \"hybrid\""),
        FieldSpec::new(
            "external_url",
            "The application URL or external listing URL",
        ),
        FieldSpec::new(
            "commitment",
            "The time commitment (e.g., \"part-time\", \"full-time\", \"one-time\", \"ongoing\")",
        ),
        FieldSpec::new("requirements", "The requirements or qualifications"),
        FieldSpec::new(
            "application_deadline",
            "The deadline in YYYY-MM-DD format if available",
        ),
        FieldSpec::new(
            "posted_date",
            "When it was posted in YYYY-MM-DD format if available",
        ),
        FieldSpec::new(
            "compensation",
            "Salary info for jobs or \"unpaid\" for volunteer",
        ),
        FieldSpec::new(
            "image_url",
            "The URL of the opportunity image if available",
        ),
        FieldSpec::new("slug", "A URL-friendly slug based on the title"),
        FieldSpec::new("tags", "An array of relevant tags"),
    ];

    pub fn from_partial(partial: &PartialRecord) -> serde_json::Result<Self> {
        serde_json::from_value(serde_json::Value::Object(partial.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_match_serialized_keys() {
        let value = serde_json::to_value(OpportunityRecord::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), OpportunityRecord::FIELDS.len());
        for field in OpportunityRecord::FIELDS {
            assert!(object.contains_key(field.name), "missing {}", field.name);
        }
    }

    #[test]
    fn test_type_key_round_trips_through_rename() {
        let partial = json!({ "title": "Food Shelf Helper", "type": "volunteer" });
        let opportunity =
            OpportunityRecord::from_partial(partial.as_object().unwrap()).unwrap();

        assert_eq!(opportunity.opportunity_type.as_deref(), Some("volunteer"));
        let value = serde_json::to_value(&opportunity).unwrap();
        assert_eq!(value["type"], json!("volunteer"));
    }
}
