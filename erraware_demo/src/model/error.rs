//! Error payloads for the demo's fallible steps.
//!
//! A `Result` carries a single error type, so both payloads live in `DemoError`.
//! There are deliberately no `From` conversions: each step builds the variant it
//! fails with, and the driver forwards it untouched.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure produced by the composing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyError {
    /// Numeric error code.
    pub code: i32,
    /// Human-readable description.
    pub message: String,
}

impl MyError {
    /// Creates a new `MyError`.
    pub fn new(code: i32, message: &str) -> Self {
        MyError {
            code,
            message: String::from(message),
        }
    }
}

/// Failure produced by the random roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SomeError {
    /// Human-readable description.
    pub message: String,
}

impl SomeError {
    /// Creates a new `SomeError`.
    pub fn new(message: &str) -> Self {
        SomeError {
            message: String::from(message),
        }
    }
}

/// Error payload of every demo step.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoError {
    /// The composing step rejected the rolled value.
    #[error("My Error: {} - {}", .0.code, .0.message)]
    My(MyError),

    /// The roll itself failed.
    #[error("Some Error: {}", .0.message)]
    Some(SomeError),
}
