//! Error types for the Datadog client.
//!
//! Two layers:
//! - [`DecodeError`]: failures turning loosely-typed JSON into typed values.
//!   Produced by the pure core (numbers, ids, pipeline codec).
//! - [`ClientError`]: everything a client call can return, including transport
//!   failures and any `DecodeError` raised while reading a response.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while decoding or encoding API values.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A numeric field held a string other than the `"auto"` sentinel.
    #[error("invalid numeric format: {0:?}")]
    InvalidNumericFormat(String),

    /// A numeric field held a JSON type that can never represent a number.
    #[error("unsupported numeric type: {0}")]
    UnsupportedNumericType(&'static str),

    /// An identifier had no canonical string form.
    #[error("unsupported id type: {type_name}")]
    UnsupportedIdType { type_name: &'static str },

    /// A required field was missing or had the wrong shape.
    #[error("malformed structure at {path}: {reason}")]
    MalformedStructure { path: String, reason: String },

    /// The payload was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedStructure {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during Datadog client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Datadog.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response or request body could not be decoded/encoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// API or application key not configured.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Retry budget above the supported maximum.
    #[error("Invalid max retries: {got} (must be at most {max})")]
    InvalidMaxRetries { got: usize, max: usize },

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::MaxRetriesExceeded(_))
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. } | Self::MissingCredentials(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(DecodeError::Json(error))
    }
}
