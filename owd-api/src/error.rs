use thiserror::Error;

/// The request never produced an HTTP response (DNS, CORS, connection reset...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure of a single loader attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("HTTP error! Status: {0}")]
    HttpStatus(u16),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
