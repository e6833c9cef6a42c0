use thiserror::Error;

/// Error types raised by the executor and the fetch provider themselves.
///
/// Per-item failures never surface through this type; they are captured as
/// [`crate::outcome::OperationError`] inside the result sequence.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Invalid configuration passed at call entry
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Config file read or parse errors
    #[error("Config error: {0}")]
    ConfigError(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
}

/// Converts reqwest HTTP errors into FetchErrors
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

impl From<std::convert::Infallible> for FetchError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
