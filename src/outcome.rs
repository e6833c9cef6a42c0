#[path = "outcome/failure.rs"]
mod failure;

pub use failure::{FailureKind, OperationError};

use serde::Serialize;

/// Settled result of one work item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed; the error is normalized to the canonical shape.
    Failure(OperationError),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the success value, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the captured failure, if any.
    pub fn failure(&self) -> Option<&OperationError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<T, OperationError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }

    /// Maps the success value, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<OperationError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err.into()),
        }
    }
}
