//! Error types for Cisco Support API operations.

use thiserror::Error;

use crate::models::EoxErrorDetails;

/// Errors that can occur during Cisco Support API operations.
#[derive(Debug, Error)]
pub enum SupportError {
    /// Configuration is missing or incomplete.
    #[error("Cisco Support configuration required: {0}")]
    ConfigMissing(String),

    /// A collection parameter violated its declared size bound.
    ///
    /// Raised before any network call is made.
    #[error("invalid {param}: {reason}")]
    Validation {
        param: &'static str,
        reason: String,
    },

    /// Token acquisition or refresh failed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The API returned a non-2xx HTTP status.
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// The response JSON did not match the expected record shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response was well-formed JSON but carried an embedded
    /// `APIError` payload.
    #[error("API error: {0}")]
    Api(serde_json::Value),

    /// The EoX service signalled an application-level error via a
    /// top-level `EOXError` payload.
    #[error("EoX error: {0}")]
    Eox(EoxErrorDetails),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for Cisco Support operations.
pub type Result<T> = core::result::Result<T, SupportError>;
