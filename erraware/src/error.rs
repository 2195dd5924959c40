//! Misuse errors raised by the `Result` accessors.
//!
//! `UnwrapError` is kept apart from the domain failures a `Result` carries: it only
//! signals that code asked for the payload of the variant that is not there. The
//! propagation driver never produces, catches or converts it.
use thiserror::Error;

/// Wrong accessor called for the actual variant of a `Result`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnwrapError {
    /// `unwrap()` was called on a `Failure`.
    #[error("unwrap() on Err")]
    UnwrapOnFailure,

    /// `unwrap_err()` was called on a `Success`.
    #[error("unwrap_err() on Ok")]
    UnwrapErrOnSuccess,
}

/// Std result alias whose error is the accessor misuse fault.
pub type UnwrapResult<T> = std::result::Result<T, UnwrapError>;
