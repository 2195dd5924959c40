//! Short-circuit propagation driver.
//!
//! A body is written as straight-line code over fallible steps. Each suspension point
//! is `step.bind()?`: a `Success` hands its payload back as a plain value, a `Failure`
//! leaves the body through `?` wrapped in [`Halt`] and becomes the whole outcome.
//!
//! - [`run`] drives a body closure once and returns a single `Result`.
//! - [`might_fail`] turns a body function into a plain function returning `Result`.
//!   Body functions may also return a `Result` directly (zero suspension points).
//! - [`attempt!`](crate::attempt) is the same guard for functions that already return
//!   `Result` and do not go through the driver.
//!
//! `Halt<E>` converts only into a `Flow` with the same `E`, so a step with a different
//! error type does not compile instead of being converted along the way.
//!
//! ```
//! use erraware::{run, Failure, Flow, Result, Success};
//!
//! fn half(n: u32) -> Result<u32, String> {
//!     if n % 2 == 0 { Success(n / 2) } else { Failure(format!("{} is odd", n)) }
//! }
//!
//! let quarter: Result<u32, String> = run(|| -> Flow<u32, String> {
//!     let h = half(12).bind()?;
//!     let q = half(h).bind()?;
//!     Ok(Success(q))
//! });
//! assert_eq!(quarter, Success(3));
//!
//! let odd: Result<u32, String> = run(|| -> Flow<u32, String> {
//!     let h = half(6).bind()?;
//!     let q = half(h).bind()?;
//!     Ok(Success(q))
//! });
//! assert_eq!(odd, Failure("3 is odd".to_string()));
//! ```
use log::trace;

use crate::result::{Failure, Result, Success};

/// Failure observed at a suspension point, carried unchanged to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Halt<E>(E);

impl<E> Halt<E> {
    /// Error payload of the failure that halted the body.
    pub fn into_inner(self) -> E {
        self.0
    }
}

/// Stepped body: `Err(Halt)` when a suspension point failed, `Ok(outcome)` when the
/// body ran to its end.
pub type Flow<T, E> = std::result::Result<Result<T, E>, Halt<E>>;

impl<T, E> Result<T, E> {
    /// Suspension point.
    ///
    /// Use as `result.bind()?` inside a body returning [`Flow`].
    ///
    /// Only an `erraware::Result` with the body's own error type can be a step. A std
    /// result is not accepted:
    ///
    /// ```compile_fail
    /// use erraware::{run, Flow, Success};
    ///
    /// let _ = run(|| -> Flow<u32, String> {
    ///     let v = "7".parse::<u32>().map_err(|e| e.to_string())?;
    ///     Ok(Success(v))
    /// });
    /// ```
    ///
    /// and neither is a step whose error payload would need converting:
    ///
    /// ```compile_fail
    /// use erraware::{run, Failure, Flow, Result, Success};
    ///
    /// let _ = run(|| -> Flow<u32, String> {
    ///     let step: Result<u32, i32> = Failure(1);
    ///     let v = step.bind()?;
    ///     Ok(Success(v))
    /// });
    /// ```
    pub fn bind(self) -> std::result::Result<T, Halt<E>> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(Halt(error)),
        }
    }
}

/// Something the driver can finish into a single `Result`.
pub trait Body {
    /// Success payload of the finished body.
    type Value;
    /// Failure payload of the finished body.
    type Error;

    /// Settle the body into its outcome.
    fn resume(self) -> Result<Self::Value, Self::Error>;
}

/// Zero-step body: already an outcome.
impl<T, E> Body for Result<T, E> {
    type Value = T;
    type Error = E;

    fn resume(self) -> Result<T, E> {
        self
    }
}

impl<T, E> Body for Flow<T, E> {
    type Value = T;
    type Error = E;

    fn resume(self) -> Result<T, E> {
        match self {
            Ok(outcome) => outcome,
            Err(Halt(error)) => {
                trace!("suspension point failed, body halted");
                Failure(error)
            }
        }
    }
}

/// Drives `body` to completion and returns its outcome.
///
/// The first failed suspension point ends the body; its `Failure` is returned as is.
pub fn run<T, E, F>(body: F) -> Result<T, E>
where
    F: FnOnce() -> Flow<T, E>,
{
    body().resume()
}

/// Wraps a body function into a plain function with the same argument.
///
/// Functions of several arguments take them as one tuple. The wrapper keeps no state
/// between calls.
pub fn might_fail<A, B, F>(f: F) -> impl Fn(A) -> Result<B::Value, B::Error>
where
    F: Fn(A) -> B,
    B: Body,
{
    move |args| f(args).resume()
}

/// Early-return guard for functions returning [`Result`](crate::Result).
///
/// Evaluates to the `Success` payload, or returns the `Failure` from the enclosing
/// function untouched.
#[macro_export]
macro_rules! attempt {
    ($step:expr $(,)?) => {
        match $step {
            $crate::Result::Success(value) => value,
            $crate::Result::Failure(error) => return $crate::Result::Failure(error),
        }
    };
}
