use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{EventRecord, FieldSpec, OpportunityRecord};

/// Which schema governs a scrape: event or opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Event,
    Opportunity,
}

/// A `type` value that names neither record kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("type must be \"event\" or \"opportunity\", got {0:?}")]
pub struct UnknownKind(pub String);

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Event => "event",
            RecordKind::Opportunity => "opportunity",
        }
    }

    /// Every field of this kind's schema, in prompt order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            RecordKind::Event => EventRecord::FIELDS,
            RecordKind::Opportunity => OpportunityRecord::FIELDS,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "event" => Ok(RecordKind::Event),
            "opportunity" => Ok(RecordKind::Opportunity),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("event".parse::<RecordKind>(), Ok(RecordKind::Event));
        assert_eq!(
            "opportunity".parse::<RecordKind>(),
            Ok(RecordKind::Opportunity)
        );
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Event".parse::<RecordKind>().is_err());
        assert!("job".parse::<RecordKind>().is_err());
        assert!("".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordKind::Opportunity).unwrap(),
            "\"opportunity\""
        );
        assert_eq!(RecordKind::Event.to_string(), "event");
    }
}
