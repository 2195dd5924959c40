//! Error types used by the demo binary itself.
//!
//! Domain failures travel inside `erraware::Result`; `AppError` only covers what can
//! go wrong around them, such as encoding an outcome for output.
use thiserror::Error;

/// Failure of the demo program.
#[derive(Error, Debug)]
pub enum AppError {
    /// Failure while encoding an outcome as JSON.
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// Std result alias with `AppError` as the default error.
pub type AppResult<T, E = AppError> = std::result::Result<T, E>;
