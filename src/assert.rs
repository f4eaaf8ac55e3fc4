//! Assertions which halt the test and point at the caller's line.
//!
//! Equality is `PartialEq`, so collections and derived types compare by
//! contents.

use std::fmt::{Debug, Display};

use tracing::error;

use crate::{context::TestContext, location::CallSite};

/// A value which may carry an error.
pub trait Fallible {
    type Value;
    type Error: Display;

    fn into_result(self) -> Result<Self::Value, Self::Error>;
}

impl<T, E: Display> Fallible for Result<T, E> {
    type Value = T;
    type Error = E;

    fn into_result(self) -> Result<T, E> {
        self
    }
}

/// `None` means no error.
impl<E: Display> Fallible for Option<E> {
    type Value = ();
    type Error = E;

    fn into_result(self) -> Result<(), E> {
        match self {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}

#[track_caller]
fn fail<C: TestContext + ?Sized>(tb: &C, site: CallSite, message: String) -> ! {
    error!(file = site.file(), line = site.line(), "assertion failed");
    tb.fatal(message)
}

/// Fails the test if the condition is false.
#[track_caller]
pub fn assert<C: TestContext + ?Sized>(tb: &C, condition: bool, message: impl Display) {
    if !condition {
        let site = CallSite::caller();
        fail(tb, site, tb.style().message(&site, message))
    }
}

/// Fails the test if there is an error. Returns the success value.
#[track_caller]
pub fn ok<C: TestContext + ?Sized, F: Fallible>(tb: &C, value: F) -> F::Value {
    match value.into_result() {
        Ok(value) => value,
        Err(e) => {
            let site = CallSite::caller();
            fail(tb, site, tb.style().unexpected_error(&site, e))
        }
    }
}

/// Fails the test if `expected` is not equal to `actual`.
#[track_caller]
pub fn equals<C, E, A>(tb: &C, expected: E, actual: A)
where
    C: TestContext + ?Sized,
    E: PartialEq<A> + Debug,
    A: Debug,
{
    if expected != actual {
        let site = CallSite::caller();
        fail(tb, site, tb.style().mismatch(&site, expected, actual))
    }
}

/// Fails the test if `expected` is equal to `actual`.
#[track_caller]
pub fn not_equals<C, E, A>(tb: &C, expected: E, actual: A)
where
    C: TestContext + ?Sized,
    E: PartialEq<A> + Debug,
    A: Debug,
{
    if expected == actual {
        let site = CallSite::caller();
        fail(tb, site, tb.style().unexpected_match(&site, expected, actual))
    }
}
