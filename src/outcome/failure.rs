use std::any::Any;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::error::FetchError;

/// Broad category of a per-item failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Connection, DNS, TLS or URL errors
    Transport,
    /// The request exceeded its timeout
    Timeout,
    /// The server answered with a non-success status
    Status,
    /// The response body could not be read or decoded
    Body,
    /// The operation panicked
    Panic,
    /// Anything else, including plain string failures
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Transport => "transport",
            FailureKind::Timeout => "timeout",
            FailureKind::Status => "status",
            FailureKind::Body => "body",
            FailureKind::Panic => "panic",
            FailureKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Canonical shape of a captured per-item failure.
///
/// Whatever the provider failed with (an error type, a plain string, a panic
/// payload) ends up here, so consumers have one type to match on. HTTP status
/// codes are kept in `status` rather than folded into the message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct OperationError {
    pub kind: FailureKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl OperationError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            cause: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Builds a failure from any error, rendering its source chain as the cause.
    pub fn from_error(kind: FailureKind, err: &(dyn StdError + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(inner) = source {
            chain.push(inner.to_string());
            source = inner.source();
        }
        Self {
            kind,
            message: err.to_string(),
            status: None,
            cause: (!chain.is_empty()).then(|| chain.join(": ")),
        }
    }

    /// Normalizes a panic payload caught from an operation.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let detail = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "operation panicked with a non-string payload".to_string()
        };
        Self::new(FailureKind::Panic, format!("operation panicked: {detail}"))
    }
}

impl From<&str> for OperationError {
    fn from(message: &str) -> Self {
        Self::new(FailureKind::Other, message)
    }
}

impl From<String> for OperationError {
    fn from(message: String) -> Self {
        Self::new(FailureKind::Other, message)
    }
}

impl From<reqwest::Error> for OperationError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            FailureKind::Timeout
        } else if err.is_status() {
            FailureKind::Status
        } else if err.is_body() || err.is_decode() {
            FailureKind::Body
        } else {
            FailureKind::Transport
        };
        let mut out = Self::from_error(kind, &err);
        out.status = err.status().map(|s| s.as_u16());
        out
    }
}

impl From<FetchError> for OperationError {
    fn from(err: FetchError) -> Self {
        let kind = match err {
            FetchError::HttpError(_) => FailureKind::Transport,
            _ => FailureKind::Other,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<std::io::Error> for OperationError {
    fn from(err: std::io::Error) -> Self {
        let kind = if err.kind() == std::io::ErrorKind::TimedOut {
            FailureKind::Timeout
        } else {
            FailureKind::Other
        };
        Self::from_error(kind, &err)
    }
}

impl From<Infallible> for OperationError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
