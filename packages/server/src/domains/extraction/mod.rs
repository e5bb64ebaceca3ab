//! Extraction domain - turn a URL into an event or opportunity record
//!
//! # Architecture
//!
//! ```text
//! POST /api/scrape → validate_request → ExtractionService::extract
//!     → BasePageFetcher::fetch → prompts::build_prompt
//!     → BaseAI::complete_with_model → parsing::parse_reply → record
//! ```
//!
//! # Components
//!
//! - `prompts`: Per-kind instruction text with the truncated page embedded
//! - `parsing`: Strict parse, then brace-span extraction, as a tagged outcome
//! - `service`: The pipeline and its settings
//! - `errors`: One variant per failing step

pub mod errors;
pub mod parsing;
pub mod prompts;
pub mod service;

pub use errors::ExtractError;
pub use parsing::{parse_reply, ParseOutcome};
pub use prompts::build_prompt;
pub use service::*;
