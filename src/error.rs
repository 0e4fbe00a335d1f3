//! Error types for Zanox API operations.

use thiserror::Error;

/// Errors that can occur during Zanox API operations.
#[derive(Debug, Error)]
pub enum ZanoxError {
    /// Configuration is missing or incomplete.
    #[error("Zanox configuration required: {0}")]
    ConfigMissing(String),

    /// A date argument was not in `YYYY-MM-DD` form.
    #[error("Invalid date '{0}': expected format YYYY-MM-DD")]
    InvalidDate(String),

    /// A query parameter could not be used as a filter.
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// A date-scoped resource was requested without a date.
    #[error("Resource '{0}' requires a date (YYYY-MM-DD)")]
    MissingDate(&'static str),

    /// The request signature could not be computed.
    #[error("Failed to sign request: {0}")]
    Signing(String),

    /// A header value contained characters HTTP does not allow.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Transport error reported by a non-reqwest collaborator.
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("Malformed response (HTTP {status}): {source}; body starts with {body:?}")]
    MalformedResponse {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error.
    #[error("Failed to serialize JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for Zanox operations.
pub type Result<T> = core::result::Result<T, ZanoxError>;
