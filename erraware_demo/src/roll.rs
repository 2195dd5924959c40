//! Fallible steps composed through the propagation driver.
//!
//! - `do_random` rolls a die in `0..=5` and fails on zero.
//! - `compose` binds the roll, rejects a one and increments anything else.
//! - `report` turns the final outcome into the line printed by `main`.
use erraware::{Failure, Flow, Result, Success, might_fail, run};
use log::debug;
use rand::Rng;

use crate::model::error::{DemoError, MyError, SomeError};

/// Upper bound (inclusive) of the roll.
const ROLL_MAX: u32 = 5;

/// Maps a raw roll to its outcome.
fn classify(num: u32) -> Result<u32, DemoError> {
    if num > 0 {
        return Success(num);
    }
    Failure(DemoError::Some(SomeError::new("random error")))
}

fn roll_body<R: Rng>(rng: &mut R) -> Result<u32, DemoError> {
    let num = rng.random_range(0..=ROLL_MAX);
    debug!("rolled {}", num);
    classify(num)
}

/// Rolls a die and fails on zero.
pub fn do_random<R: Rng>(rng: &mut R) -> Result<u32, DemoError> {
    might_fail(roll_body::<R>)(rng)
}

/// Composes a roll: `1` is rejected with `MyError(0, "Nope")`, anything else is
/// returned plus one. A value with no successor is rejected with
/// `MyError(1, "Roll out of range")`. A failed roll is returned as is.
pub fn compose_with<F>(roll: F) -> Result<u32, DemoError>
where
    F: FnOnce() -> Result<u32, DemoError>,
{
    run(|| -> Flow<u32, DemoError> {
        let value = roll().bind()?;
        if value == 1 {
            return Ok(Failure(DemoError::My(MyError::new(0, "Nope"))));
        }
        match value.checked_add(1) {
            Some(next) => Ok(Success(next)),
            None => Ok(Failure(DemoError::My(MyError::new(1, "Roll out of range")))),
        }
    })
}

/// Composes a fresh roll from `rng`.
pub fn compose<R: Rng>(rng: &mut R) -> Result<u32, DemoError> {
    compose_with(|| do_random(rng))
}

/// Human-readable line for an outcome.
pub fn report(outcome: &Result<u32, DemoError>) -> String {
    match outcome {
        Success(value) => format!("Success!: {}", value),
        Failure(DemoError::My(MyError { code, message })) => {
            format!("My Error: {} - {}", code, message)
        }
        Failure(DemoError::Some(SomeError { message })) => format!("Some Error: {}", message),
    }
}
