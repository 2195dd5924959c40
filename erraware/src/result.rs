//! Two-variant success/failure container.
//!
//! `Result` is a closed enum, so callers branch on the outcome with `match` and can
//! destructure the payload as deeply as they like. The accessors `unwrap` and
//! `unwrap_err` never panic: calling the wrong one returns an `UnwrapError`.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{UnwrapError, UnwrapResult};

/// Outcome of a fallible operation: either `Success(T)` or `Failure(E)`.
///
/// Equality, hashing and debug output are structural over the payload.
#[must_use = "this `Result` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Result<T, E> {
    /// Successful outcome carrying a value.
    Success(T),
    /// Failed outcome carrying an error payload.
    Failure(E),
}

pub use self::Result::{Failure, Success};

/// Builds a `Success`.
pub fn success<T, E>(value: T) -> Result<T, E> {
    Success(value)
}

/// Builds a `Failure`.
pub fn failure<T, E>(error: E) -> Result<T, E> {
    Failure(error)
}

impl<T, E> Result<T, E> {
    /// Returns the `Success` payload.
    ///
    /// Fails with [`UnwrapError::UnwrapOnFailure`] on a `Failure`; the error payload
    /// is dropped in that case.
    pub fn unwrap(self) -> UnwrapResult<T> {
        match self {
            Success(value) => Ok(value),
            Failure(_) => Err(UnwrapError::UnwrapOnFailure),
        }
    }

    /// Returns the `Failure` payload.
    ///
    /// Fails with [`UnwrapError::UnwrapErrOnSuccess`] on a `Success`.
    pub fn unwrap_err(self) -> UnwrapResult<E> {
        match self {
            Success(_) => Err(UnwrapError::UnwrapErrOnSuccess),
            Failure(error) => Ok(error),
        }
    }

    /// `true` for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// `true` for `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Borrows the payload without consuming the container.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(value) => write!(f, "Success({})", value),
            Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(res: std::result::Result<T, E>) -> Self {
        match res {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}
