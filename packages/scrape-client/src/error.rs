//! Typed errors for the scrape client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RequestError>;

/// Why a scrape request produced no record. `Display` is the message shown
/// to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Please enter a URL")]
    EmptyUrl,

    /// The service could not be reached
    #[error("{0}")]
    Network(String),

    /// The service answered with an error
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Response body was not a JSON object
    #[error("Unexpected response from scrape service (HTTP {status})")]
    InvalidResponse { status: u16 },
}

/// Why a form cannot be turned into a save payload.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Invalid form data: {0}")]
    InvalidField(#[from] serde_json::Error),
}
