//! Safe invocation wrappers that turn failure into absence.
//!
//! A failure is either a panic or an `Err` return. Both are dropped without a
//! trace and reported as [`Maybe::None`], so callers cannot tell "failed" from
//! "had no value". Panics are caught with [`std::panic::catch_unwind`], which
//! only works when the crate is built with `panic = "unwind"`.
//!
//! These helpers log nothing themselves, but a swallowed panic still runs the
//! process panic hook. With the default hook that prints
//! `thread '...' panicked at ...` to stderr; install a quiet hook with
//! [`std::panic::set_hook`] if that output is unwanted.

use std::panic::{self, AssertUnwindSafe};

use crate::maybe::Maybe;
use crate::truthy::Truthy;

/// Run `f`, returning `Some` with its value or `None` if it panics.
pub fn catch_to_option<T, F>(f: F) -> Maybe<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Maybe::Some(value),
        Err(_) => Maybe::None,
    }
}

/// Like [`catch_to_option`] for closures that report failure through `Err`.
pub fn try_catch_to_option<T, E, F>(f: F) -> Maybe<T>
where
    F: FnOnce() -> Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Maybe::Some(value),
        Ok(Err(_)) | Err(_) => Maybe::None,
    }
}

/// Wrap a one-argument function so that it returns `Some` only for truthy
/// results.
///
/// A falsy result (`0`, `""`, `false`, ...) and a panic both come back as
/// `None`; the two are indistinguishable to the caller.
pub fn to_optional<A, R, F>(f: F) -> impl Fn(A) -> Maybe<R>
where
    F: Fn(A) -> R,
    R: Truthy,
{
    move |arg| match panic::catch_unwind(AssertUnwindSafe(|| f(arg))) {
        Ok(value) if value.is_truthy() => Maybe::Some(value),
        _ => Maybe::None,
    }
}

/// Like [`to_optional`] for functions that report failure through `Err`.
pub fn try_to_optional<A, R, E, F>(f: F) -> impl Fn(A) -> Maybe<R>
where
    F: Fn(A) -> Result<R, E>,
    R: Truthy,
{
    move |arg| match panic::catch_unwind(AssertUnwindSafe(|| f(arg))) {
        Ok(Ok(value)) if value.is_truthy() => Maybe::Some(value),
        _ => Maybe::None,
    }
}

/// `Some(true)` when `value` is truthy, `None` otherwise.
///
/// Null-like inputs give `None`, but so do `0`, `""` and `false`.
pub fn optional_defined<V: Truthy>(value: V) -> Maybe<bool> {
    to_optional(|v: V| v.is_truthy())(value)
}
