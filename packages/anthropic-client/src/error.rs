//! Error types for the Anthropic client.

use thiserror::Error;

/// Result type for Anthropic client operations.
pub type Result<T> = std::result::Result<T, AnthropicError>;

#[derive(Debug, Error)]
pub enum AnthropicError {
    /// Request never got a response, or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status from the Messages API
    #[error("Anthropic API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response without any text content block
    #[error("Anthropic returned no text content")]
    EmptyCompletion,

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}
