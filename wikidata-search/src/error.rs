//! Error types for the Wikidata client.

use thiserror::Error;

/// Result type for client operations.
pub type WikidataResult<T> = Result<T, WikidataError>;

/// Errors returned by search, entity lookup and property resolution.
#[derive(Debug, Error)]
pub enum WikidataError {
    /// Search options are missing or out of range. Raised before any request.
    #[error("invalid search options: {0}")]
    InvalidOptions(String),

    /// The entity id list cannot be sent as an `ids` parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP call itself failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered without a body.
    #[error("empty response from Wikidata")]
    EmptyResponse,

    /// The API answered with a non-200 status.
    #[error("request error: status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The payload decoded but lacks the expected top-level field.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The body is not valid JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for WikidataError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
