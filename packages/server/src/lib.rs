// Scrape service - API core
//
// Backend for the admin console's "auto-fill from URL" tool: fetches a page,
// asks an LLM to pull event or opportunity fields out of it, and returns the
// result as JSON for the editor to merge into its form.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
