//! Validated concurrency limit.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::FetchError;

const INVALID_LIMIT: &str = "maxConcurrency must be a positive integer";

/// Maximum number of operations allowed in flight at once. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConcurrencyLimit(NonZeroUsize);

impl ConcurrencyLimit {
    /// Validates `value` as a limit.
    pub fn new(value: usize) -> Result<Self, FetchError> {
        NonZeroUsize::new(value).map(Self).ok_or_else(invalid)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

fn invalid() -> FetchError {
    FetchError::InvalidArgument(INVALID_LIMIT.to_string())
}

impl From<NonZeroUsize> for ConcurrencyLimit {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl TryFrom<usize> for ConcurrencyLimit {
    type Error = FetchError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! limit_from_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for ConcurrencyLimit {
                type Error = FetchError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    usize::try_from(value)
                        .map_err(|_| invalid())
                        .and_then(Self::new)
                }
            }
        )*
    };
}

limit_from_int!(u32, u64, i32, i64);

impl TryFrom<f64> for ConcurrencyLimit {
    type Error = FetchError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > usize::MAX as f64
        {
            return Err(invalid());
        }
        Self::new(value as usize)
    }
}

impl fmt::Display for ConcurrencyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(64, 64)]
    fn accepts_positive_integers(#[case] input: i64, #[case] expected: usize) {
        let limit = ConcurrencyLimit::try_from(input).expect("valid limit");
        assert_eq!(limit.get(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn rejects_non_positive_integers(#[case] input: i64) {
        let err = ConcurrencyLimit::try_from(input).unwrap_err();
        assert!(matches!(err, FetchError::InvalidArgument(_)));
    }

    #[rstest]
    #[case(1.5)]
    #[case(0.0)]
    #[case(-2.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_floats(#[case] input: f64) {
        let err = ConcurrencyLimit::try_from(input).unwrap_err();
        assert_eq!(err.to_string(), format!("Invalid argument: {INVALID_LIMIT}"));
    }

    #[test]
    fn integral_floats_are_accepted() {
        assert_eq!(ConcurrencyLimit::try_from(4.0).unwrap().get(), 4);
    }

    #[test]
    fn zero_usize_is_rejected() {
        assert!(ConcurrencyLimit::new(0).is_err());
        assert_eq!(ConcurrencyLimit::new(2).unwrap().to_string(), "2");
    }
}
