//! Record shapes for the admin console's scrape-and-fill flow.
//!
//! Two record kinds are curated: events and opportunities. The scrape
//! service returns a [`PartialRecord`] (a loose JSON object) and the editor
//! merges it into its form. The typed structs below describe the full,
//! enumerable field set of each kind.
//!
//! # Example
//!
//! ```rust,ignore
//! use records::{EventRecord, RecordKind};
//!
//! let kind: RecordKind = "event".parse()?;
//! for field in kind.fields() {
//!     println!("{}: {}", field.name, field.description);
//! }
//!
//! let event = EventRecord::from_partial(&partial)?;
//! ```

pub mod de;
pub mod event;
pub mod kind;
pub mod opportunity;
pub mod wire;

pub use event::EventRecord;
pub use kind::{RecordKind, UnknownKind};
pub use opportunity::OpportunityRecord;
pub use wire::{ErrorBody, ScrapeRequest};

/// A subset of a record's fields, keyed by field name.
///
/// Keys the model did not return are simply absent; `null` values mean
/// "unknown". Both are no-ops when merged into a form.
pub type PartialRecord = serde_json::Map<String, serde_json::Value>;

/// One field of a record schema, with the one-line hint given to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}
