//! # Propagation Driver Tests
//!
//! Laws of the short-circuit driver through the public API:
//!
//! - short-circuit at the first failed suspension point
//! - pass-through of zero-step bodies
//! - chaining of wrapped functions without re-wrapping the failure
//! - no state kept between invocations

use std::cell::Cell;

use erraware::{Failure, Flow, Result, Success, attempt, might_fail, run};

#[derive(Debug, Clone, PartialEq)]
struct StepError {
    step: u32,
    reason: String,
}

#[derive(Debug, Clone, PartialEq)]
enum ChainError {
    Inner(StepError),
    Outer { code: i32 },
}

// ─── Helpers ────────────────────────────────────────────────────────

/// Step that counts its evaluation and fails when `step == fail_at`.
fn counted_step(counter: &Cell<u32>, step: u32, fail_at: u32) -> Result<u32, StepError> {
    counter.set(counter.get() + 1);
    if step == fail_at {
        Failure(StepError { step, reason: format!("step {} failed", step) })
    } else {
        Success(step * 10)
    }
}

/// Five suspension points in a row, summing their values.
fn five_steps(counter: &Cell<u32>, fail_at: u32) -> Result<u32, StepError> {
    five_steps_tracked(counter, &Cell::new(0), fail_at)
}

/// Same as `five_steps`, counting in `resumed` every time the body continues past
/// a suspension point.
fn five_steps_tracked(counter: &Cell<u32>, resumed: &Cell<u32>, fail_at: u32) -> Result<u32, StepError> {
    run(|| -> Flow<u32, StepError> {
        let mut total = 0;
        for step in 1..=5 {
            total += counted_step(counter, step, fail_at).bind()?;
            resumed.set(resumed.get() + 1);
        }
        Ok(Success(total))
    })
}

// ─── Short-circuit ──────────────────────────────────────────────────

#[test]
fn failure_at_k_stops_before_k_plus_one() {
    for k in 1..=5 {
        let counter = Cell::new(0);
        let resumed = Cell::new(0);
        let res = five_steps_tracked(&counter, &resumed, k);

        assert_eq!(
            res,
            Failure(StepError { step: k, reason: format!("step {} failed", k) })
        );
        assert_eq!(resumed.get(), k - 1);
        // Only the failed step itself and the ones before it ran.
        assert_eq!(counter.get(), k, "steps after {} must not be evaluated", k);
    }
}

#[test]
fn all_steps_succeed_and_values_thread_through() {
    let counter = Cell::new(0);
    let res = five_steps(&counter, 0);

    assert_eq!(res, Success(10 + 20 + 30 + 40 + 50));
    assert_eq!(counter.get(), 5);
}

#[test]
fn code_after_failed_suspension_never_runs() {
    let reached = Cell::new(false);
    let res: Result<u32, &str> = run(|| -> Flow<u32, &'static str> {
        let _ = Failure::<u32, _>("early").bind()?;
        reached.set(true);
        Ok(Success(1))
    });

    assert_eq!(res, Failure("early"));
    assert!(!reached.get());
}

#[test]
fn steps_resolve_in_source_order() {
    let order = std::cell::RefCell::new(Vec::new());
    let record = |name: &'static str| -> Result<&'static str, ()> {
        order.borrow_mut().push(name);
        Success(name)
    };

    let res = run(|| -> Flow<String, ()> {
        let a = record("a").bind()?;
        let b = record("b").bind()?;
        let c = record("c").bind()?;
        Ok(Success(format!("{}{}{}", a, b, c)))
    });

    assert_eq!(res, Success("abc".to_string()));
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
}

// ─── Pass-through ───────────────────────────────────────────────────

fn direct(value: Option<u32>) -> Result<u32, String> {
    match value {
        Some(v) => Success(v),
        None => Failure("missing".to_string()),
    }
}

#[test]
fn zero_step_body_passes_success_through() {
    let wrapped = might_fail(direct);
    assert_eq!(wrapped(Some(9)), Success(9));
}

#[test]
fn zero_step_body_passes_failure_through() {
    let wrapped = might_fail(direct);
    assert_eq!(wrapped(None), Failure("missing".to_string()));
}

#[test]
fn body_may_return_failure_as_its_final_value() {
    let res = run(|| -> Flow<u32, String> {
        let v = direct(Some(1)).bind()?;
        Ok(Failure(format!("rejected {}", v)))
    });
    assert_eq!(res, Failure("rejected 1".to_string()));
}

// ─── Chaining ───────────────────────────────────────────────────────

fn inner_body(fail: bool) -> Flow<u32, ChainError> {
    let base = if fail {
        Failure(ChainError::Inner(StepError { step: 1, reason: "inner".into() }))
    } else {
        Success(2)
    };
    let v = base.bind()?;
    Ok(Success(v * 3))
}

fn outer_body(fail_inner: bool) -> Flow<u32, ChainError> {
    let inner = might_fail(inner_body);
    let v = inner(fail_inner).bind()?;
    if v > 100 {
        return Ok(Failure(ChainError::Outer { code: 1 }));
    }
    Ok(Success(v + 1))
}

#[test]
fn outer_returns_identical_inner_failure() {
    let outer = might_fail(outer_body);
    let res = outer(true);

    assert_eq!(
        res,
        Failure(ChainError::Inner(StepError { step: 1, reason: "inner".into() }))
    );
    assert!(matches!(
        res,
        Failure(ChainError::Inner(StepError { step: 1, .. }))
    ));
}

#[test]
fn outer_uses_inner_success_value() {
    let outer = might_fail(outer_body);
    assert_eq!(outer(false), Success(7));
}

#[test]
fn multi_argument_bodies_take_a_tuple() {
    fn ratio((num, den): (u32, u32)) -> Flow<u32, String> {
        let den = if den == 0 { Failure("division by zero".to_string()) } else { Success(den) };
        let den = den.bind()?;
        Ok(Success(num / den))
    }

    let ratio = might_fail(ratio);
    assert_eq!(ratio((9, 3)), Success(3));
    assert_eq!(ratio((9, 0)), Failure("division by zero".to_string()));
}

// ─── Idempotence ────────────────────────────────────────────────────

#[test]
fn repeated_calls_yield_equal_results() {
    let outer = might_fail(outer_body);
    assert_eq!(outer(false), outer(false));
    assert_eq!(outer(true), outer(true));

    let counter = Cell::new(0);
    let first = five_steps(&counter, 3);
    counter.set(0);
    let second = five_steps(&counter, 3);
    assert_eq!(first, second);
    assert_eq!(counter.get(), 3);
}

// ─── attempt! ───────────────────────────────────────────────────────

fn guarded(counter: &Cell<u32>, fail_at: u32) -> Result<u32, StepError> {
    let a = attempt!(counted_step(counter, 1, fail_at));
    let b = attempt!(counted_step(counter, 2, fail_at));
    Success(a + b)
}

#[test]
fn attempt_matches_driver_semantics() {
    let counter = Cell::new(0);
    assert_eq!(guarded(&counter, 0), Success(30));
    assert_eq!(counter.get(), 2);

    counter.set(0);
    assert_eq!(
        guarded(&counter, 1),
        Failure(StepError { step: 1, reason: "step 1 failed".into() })
    );
    assert_eq!(counter.get(), 1);
}
