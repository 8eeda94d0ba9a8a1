use reqwest::StatusCode;
use thiserror::Error;

/// # Client Error
///
/// ## Variants:
///
/// Network (reqwest::Error) -> the request never got a response (DNS, refused connection, reset)
///
/// Http (StatusCode) -> the backend answered with a non-2xx status
///
/// Parse (serde_json::Error) -> the response body is not valid JSON or misses expected fields
///
/// Validation (String) -> a required field was empty, caught before any request
///
/// Config (String) -> the client could not be configured (bad base URL, TLS backend)
///
/// None of these is fatal: callers turn them into a message for the error slot
/// with [`crate::utils::error_construct::error_construct`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected status {0}")]
    Http(StatusCode),

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Status returned by the backend, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}
