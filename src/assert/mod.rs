//! Thin assertion functions. Each one asks the engine or the nilness
//! classifier for a verdict and aborts through the [`Reporter`] when it fails.

pub mod failure;
pub mod reporter;

use crate::assert::failure::Failure;
use crate::assert::reporter::Reporter;
use crate::nilness::{expect_nil, expect_not_nil};
use crate::traits::loose_eq::LooseEq;
use crate::values::value::AsValue;
use core::fmt::Debug;
use log::debug;

fn report<R: Reporter + ?Sized>(reporter: &R, outcome: Result<(), Failure>) {
    if let Err(failure) = outcome {
        debug!("assertion failed: {failure}");
        reporter.report_and_abort(&failure.to_string());
    }
}

/// Fails unless `a` and `b` are loosely equal.
pub fn equal<R, A, B>(reporter: &R, a: &A, b: &B)
where
    R: Reporter + ?Sized,
    A: AsValue + ?Sized,
    B: AsValue + ?Sized,
{
    let (a, b) = (a.as_value(), b.as_value());
    let outcome = if a.loose_eq(&b) {
        Ok(())
    } else {
        Err(Failure::NotEqual {
            left: a.to_string(),
            right: b.to_string(),
        })
    };
    report(reporter, outcome);
}

/// Fails unless `a == b`.
pub fn deep_equal<R, A, B>(reporter: &R, a: &A, b: &B)
where
    R: Reporter + ?Sized,
    A: PartialEq<B> + Debug + ?Sized,
    B: Debug + ?Sized,
{
    let outcome = if a == b {
        Ok(())
    } else {
        Err(Failure::NotEqual {
            left: format!("{a:?}"),
            right: format!("{b:?}"),
        })
    };
    report(reporter, outcome);
}

pub fn that<R: Reporter + ?Sized>(reporter: &R, condition: bool) {
    report(
        reporter,
        condition.then_some(()).ok_or(Failure::ConditionFailed),
    );
}

pub fn is_true<R: Reporter + ?Sized>(reporter: &R, value: bool) {
    report(
        reporter,
        value
            .then_some(())
            .ok_or(Failure::ExpectedBool { expected: true }),
    );
}

pub fn is_false<R: Reporter + ?Sized>(reporter: &R, value: bool) {
    report(
        reporter,
        (!value)
            .then_some(())
            .ok_or(Failure::ExpectedBool { expected: false }),
    );
}

/// Fails unless `value` is the universal nil or a nil reference.
/// Always fails for types that never admit nil.
pub fn nil<R, T>(reporter: &R, value: &T)
where
    R: Reporter + ?Sized,
    T: AsValue + ?Sized,
{
    report(reporter, expect_nil(&value.as_value()));
}

/// Fails if `value` is the universal nil or a nil reference.
/// Always holds for types that never admit nil.
pub fn not_nil<R, T>(reporter: &R, value: &T)
where
    R: Reporter + ?Sized,
    T: AsValue + ?Sized,
{
    report(reporter, expect_not_nil(&value.as_value()));
}

pub fn no_error<R, T, E>(reporter: &R, result: &Result<T, E>)
where
    R: Reporter + ?Sized,
    E: Debug,
{
    let outcome = match result {
        Ok(_) => Ok(()),
        Err(error) => Err(Failure::UnexpectedError(format!("{error:?}"))),
    };
    report(reporter, outcome);
}

pub fn error<R, T, E>(reporter: &R, result: &Result<T, E>)
where
    R: Reporter + ?Sized,
{
    let outcome = match result {
        Ok(_) => Err(Failure::MissingError),
        Err(_) => Ok(()),
    };
    report(reporter, outcome);
}
