//! Narrowed forms of [`Result`], for code that has already established which variant it holds.
//!
//! [`ResOk`] and [`ResErr`] only offer the operations that are meaningful for their variant. The
//! misuse cases of [`Result`] don't exist on them at all: there is no [`Result::unwrap_err`] on a
//! [`ResOk`], and [`ResErr`] has no success type to unwrap into. Chaining on a [`ResOk`] can only
//! pick up a failure type through [`ResOk::and_then`].
//!
//! Both types still offer the full set of combinators. On the side a narrowed type doesn't have,
//! the payload is [`Infallible`]: [`ResOk::err`] is always [`None`], and the functions passed to
//! [`ResOk::map_err`], [`ResErr::map`] and [`ResErr::and_then`] are never called (their argument
//! can't exist).

use std::convert::Infallible;

use super::{Match, Result};
use crate::option::Option::{self, None, Some};
use crate::result::Result::{Err, Ok};

/// A [`Result`] known to be [`Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResOk<T>(pub T);

/// A [`Result`] known to be [`Err`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResErr<E>(pub E);

impl<T> ResOk<T> {
    pub const fn is_ok(&self) -> bool {
        true
    }

    pub const fn is_err(&self) -> bool {
        false
    }

    pub const fn ok(self) -> Option<T> {
        Some(self.0)
    }

    pub fn err(self) -> Option<Infallible> {
        None
    }

    /// Returns the success value. Unlike [`Result::unwrap`], this can't panic.
    pub const fn unwrap(self) -> T {
        self.0
    }

    pub fn unwrap_or(self, _default: T) -> T {
        self.0
    }

    /// Invokes the `ok` handler. The `err` handler is never called and is only accepted so that
    /// the same [`Match`] can be used for either variant.
    pub fn match_with<U, F: FnOnce(T) -> U, G>(self, handlers: Match<F, G>) -> U {
        (handlers.ok)(self.0)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ResOk<U> {
        ResOk(f(self.0))
    }

    /// Mapping the error of a success does nothing: `f` is never called and the value is kept as
    /// is.
    pub fn map_err<U, F: FnOnce(Infallible) -> U>(self, _f: F) -> ResOk<T> {
        self
    }

    /// Chains a fallible computation onto the value. The failure type of the output is whatever
    /// `f` reports.
    pub fn and_then<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<U, E> {
        f(self.0)
    }

    pub const fn into_result<E>(self) -> Result<T, E> {
        Ok(self.0)
    }
}

impl<E> ResErr<E> {
    pub const fn is_ok(&self) -> bool {
        false
    }

    pub const fn is_err(&self) -> bool {
        true
    }

    pub fn ok(self) -> Option<Infallible> {
        None
    }

    pub const fn err(self) -> Option<E> {
        Some(self.0)
    }

    /// Returns the error. Unlike [`Result::unwrap_err`], this can't panic.
    pub const fn unwrap_err(self) -> E {
        self.0
    }

    pub fn unwrap_or<T>(self, default: T) -> T {
        default
    }

    /// Invokes the `err` handler. The `ok` handler is never called.
    pub fn match_with<U, F, G: FnOnce(E) -> U>(self, handlers: Match<F, G>) -> U {
        (handlers.err)(self.0)
    }

    /// Mapping the success value of a failure does nothing: `f` is never called and the error is
    /// kept as is.
    ///
    /// # Examples
    /// ```
    /// use standard_result::result::ResErr;
    ///
    /// assert_eq!(ResErr("e").map(|_| 1), ResErr("e"));
    /// ```
    pub fn map<U, F: FnOnce(Infallible) -> U>(self, _f: F) -> ResErr<E> {
        self
    }

    pub fn map_err<U, F: FnOnce(E) -> U>(self, f: F) -> ResErr<U> {
        ResErr(f(self.0))
    }

    /// Like [`ResErr::map`], the error is propagated and `f` is never called.
    pub fn and_then<U, F: FnOnce(Infallible) -> Result<U, E>>(self, _f: F) -> ResErr<E> {
        self
    }

    pub const fn into_result<T>(self) -> Result<T, E> {
        Err(self.0)
    }
}

impl<T, E> TryFrom<Result<T, E>> for ResOk<T> {
    type Error = ResErr<E>;

    fn try_from(value: Result<T, E>) -> core::result::Result<Self, Self::Error> {
        match value {
            Ok(val) => core::result::Result::Ok(ResOk(val)),
            Err(err) => core::result::Result::Err(ResErr(err)),
        }
    }
}

impl<T, E> TryFrom<Result<T, E>> for ResErr<E> {
    type Error = ResOk<T>;

    fn try_from(value: Result<T, E>) -> core::result::Result<Self, Self::Error> {
        match value {
            Ok(val) => core::result::Result::Err(ResOk(val)),
            Err(err) => core::result::Result::Ok(ResErr(err)),
        }
    }
}

impl<T, E> From<ResOk<T>> for Result<T, E> {
    fn from(value: ResOk<T>) -> Self {
        value.into_result()
    }
}

impl<T, E> From<ResErr<E>> for Result<T, E> {
    fn from(value: ResErr<E>) -> Self {
        value.into_result()
    }
}
