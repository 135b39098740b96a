//! Error types for the HTTP seam and the API transport.

use thiserror::Error;

/// Error type for a single HTTP exchange.
///
/// Describes what went wrong at the network level. Status codes are not
/// errors here; they are interpreted by the layers above.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for API transport failures.
///
/// Everything that is neither a "not found" nor a validation failure ends
/// up here: network errors, unexpected statuses and bodies that do not
/// match the `{ "data": ... }` envelope.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP exchange itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a status the caller did not expect.
    #[error("Unexpected status {status}{}", body_suffix(.body))]
    Status {
        /// Status code returned by the server
        status: http::StatusCode,
        /// Response body text, when there was one
        body: Option<String>,
    },

    /// A successful response body was not valid JSON or did not match
    /// the expected shape.
    #[error("Malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A successful response body had no `data` member.
    #[error("Response body has no `data` member")]
    MissingData,

    /// A request body could not be serialised.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Query parameters must serialise to a flat object of scalars.
    #[error("Invalid query parameter '{name}': {reason}")]
    InvalidQuery {
        /// Offending parameter name (empty when the whole value is wrong)
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The API key cannot be carried in an HTTP header.
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    /// The base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("Base URL cannot be a base: {0}")]
    InvalidBaseUrl(url::Url),

    /// A path segment (usually an id) that URL normalisation would
    /// collapse: empty, `.` or `..`.
    #[error("Invalid path segment '{segment}'")]
    InvalidPathSegment {
        /// The rejected segment
        segment: String,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    match body.as_deref() {
        Some(text) if !text.is_empty() => format!(": {text}"),
        _ => String::new(),
    }
}

impl TransportError {
    /// Returns the HTTP status for [`TransportError::Status`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
