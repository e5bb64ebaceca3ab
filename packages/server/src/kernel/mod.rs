//! Kernel module - server infrastructure and dependencies.

pub mod llm_request;
pub mod page_fetcher;
pub mod test_dependencies;
pub mod traits;

pub use llm_request::AnthropicAdapter;
pub use page_fetcher::HttpPageFetcher;
pub use test_dependencies::{MockAI, MockPageFetcher};
pub use traits::*;
