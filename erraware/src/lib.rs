//!
//! Typed success/failure container with short-circuit propagation.
//!
//! This crate aggregates:
//! - `result` — the two-variant `Result<T, E>` container and its accessors.
//! - `error` — `UnwrapError`, raised when the wrong accessor is used.
//! - `driver` — `run`, `might_fail` and `attempt!`, which stop a body at the first
//!   failed step and return that `Failure` verbatim.
#![warn(missing_docs)]
pub mod driver;
pub mod error;
pub mod result;

pub use driver::{Body, Flow, Halt, might_fail, run};
pub use error::{UnwrapError, UnwrapResult};
pub use result::{Failure, Result, Success, failure, success};
