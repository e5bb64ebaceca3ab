// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The extraction pipeline in domains/extraction composes them.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BasePageFetcher)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete a prompt with a specific model (returns raw text response)
    /// If model is None, uses the default model
    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        // Default implementation ignores model and calls complete
        let _ = model;
        self.complete(prompt).await
    }
}

// =============================================================================
// Page Fetcher Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// GET a page and return its raw body.
    ///
    /// Non-2xx responses are errors whose message carries the status code.
    async fn fetch(&self, url: &str) -> Result<String>;
}
