//! Domain types used by the demo.
//!
//! This module groups the error payloads carried by failed outcomes:
//! - `error` — `MyError`, `SomeError` and the `DemoError` enum holding either.
pub mod error;
