/*
[INPUT]:  Error sources (transport, HTTP status, JSON parsing, exchange errors, config)
[OUTPUT]: Structured error types with a coarse kind for callers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Bter adapter
#[derive(Error, Debug)]
pub enum BterError {
    /// Private endpoint called without both API key and secret
    #[error("Must provide API key and secret to use the trade API")]
    MissingCredentials,

    /// Transport layer failed (connect, TLS, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a status other than 200
    #[error("Unexpected HTTP status: {status}")]
    HttpStatus { status: u16 },

    /// Body could not be parsed as JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Exchange returned an `error` field
    #[error("API error: {message}")]
    Api { message: String },

    /// Caller-supplied parameter has an unsupported value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Coarse classification of [`BterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingCredentials,
    TransportError,
    MalformedResponse,
    ApiError,
    InvalidParameter,
    InvalidConfig,
}

impl BterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BterError::MissingCredentials => ErrorKind::MissingCredentials,
            BterError::Transport(_) | BterError::HttpStatus { .. } => ErrorKind::TransportError,
            BterError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            BterError::Api { .. } => ErrorKind::ApiError,
            BterError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            BterError::Config(_) | BterError::UrlParse(_) => ErrorKind::InvalidConfig,
        }
    }

    /// Error was raised before any network I/O took place
    pub fn is_local(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MissingCredentials | ErrorKind::InvalidParameter | ErrorKind::InvalidConfig
        )
    }

    /// Create an API error from the exchange's message
    pub fn api_error(message: impl Into<String>) -> Self {
        BterError::Api {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for BterError {
    fn from(err: reqwest::Error) -> Self {
        BterError::Transport(err.to_string())
    }
}

/// Result type alias for Bter operations
pub type Result<T> = std::result::Result<T, BterError>;
