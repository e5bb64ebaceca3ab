use thiserror::Error;

/// Failure of a scrape request. Every variant is terminal for the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Missing or malformed request input
    #[error("{0}")]
    Validation(String),

    /// LLM credential not configured
    #[error("{0}")]
    Configuration(String),

    /// Target page unreachable or non-2xx
    #[error("{0}")]
    Fetch(String),

    /// Completion call failed
    #[error("{0}")]
    Model(String),

    /// Neither strict parsing nor brace extraction produced a JSON object
    #[error("Failed to parse extracted data")]
    Parse,
}

impl ExtractError {
    /// Stable name reported in the error body's `type` field.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ExtractError::Validation(_) => "ValidationError",
            ExtractError::Configuration(_) => "ConfigurationError",
            ExtractError::Fetch(_) => "FetchError",
            ExtractError::Model(_) => "ModelError",
            ExtractError::Parse => "ParseError",
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, ExtractError::Validation(_))
    }
}
