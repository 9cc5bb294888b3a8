use std::convert::Infallible;
use std::error::Error;
use std::ops::{ControlFlow, FromResidual, Residual, Try};

use derive_more::IsVariant;

use super::{Tag, UnwrapErrOnOk, UnwrapOnErr};
use crate::option::Option::{self, None, Some};
use crate::util::result::Throw;

pub use self::Result::{Err, Ok};

/// The outcome of a computation which either succeeded with a value of type `T` ([`Ok`]) or failed
/// with an error of type `E` ([`Err`]).
///
/// Exactly one payload is ever present and the variant can't change after construction. All
/// combinators consume the Result and produce a new [`Result`] or [`Option`], so chains read from
/// left to right without any unwrapping in between. The only operations that can fail are
/// [`Result::unwrap`] and [`Result::unwrap_err`] (and their `expect` forms), which panic when the
/// caller assumed the wrong variant.
///
/// When the variant is known, a Result can be narrowed to [`ResOk`](super::ResOk) or
/// [`ResErr`](super::ResErr), which only expose the operations that make sense for that variant.
///
/// # Examples
/// ```
/// # use standard_result::prelude::*;
/// let halved = Ok::<i32, &str>(5)
///     .and_then(|x| if x > 0 { Ok(x * 2) } else { Err("neg") })
///     .map(|x| x / 4);
/// assert_eq!(halved.unwrap(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E> {
    /// A success value.
    Ok(T),
    /// A failure value.
    Err(E),
}

/// A pair of handlers for [`Result::match_with`], one per variant.
#[derive(Debug, Clone, Copy)]
pub struct Match<F, G> {
    pub ok: F,
    pub err: G,
}

impl<T, E> Result<T, E> {
    /// Returns the discriminant of this Result.
    pub const fn tag(&self) -> Tag {
        match self {
            Ok(_) => Tag::Ok,
            Err(_) => Tag::Err,
        }
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Ok(val) => Ok(val),
            Err(err) => Err(err),
        }
    }

    /// Converts from `&mut Result<T, E>` to `Result<&mut T, &mut E>`.
    pub const fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Ok(val) => Ok(val),
            Err(err) => Err(err),
        }
    }

    /// Projects the success value into an [`Option`], discarding any error.
    ///
    /// # Examples
    /// ```
    /// # use standard_result::prelude::*;
    /// assert_eq!(Ok::<u8, ()>(2).ok(), Some(2));
    /// assert_eq!(Err::<u8, ()>(()).ok(), None);
    /// ```
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(val) => Some(val),
            Err(_) => None,
        }
    }

    /// Projects the error into an [`Option`], discarding any success value.
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(err) => Some(err),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics if the Result is an [`Err`].
    ///
    /// # Examples
    /// ```
    /// # use standard_result::prelude::*;
    /// assert_eq!(Ok::<i32, &str>(5).map(|x| x + 1).unwrap(), 6);
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Ok(val) => val,
            Err(_) => UnwrapOnErr.throw(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    /// Panics with `msg` if the Result is an [`Err`].
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Ok(val) => val,
            Err(_) => panic!("{msg}"),
        }
    }

    /// Returns the success value, or `default` if the Result is an [`Err`]. Never panics.
    ///
    /// # Examples
    /// ```
    /// # use standard_result::prelude::*;
    /// assert_eq!(Err::<i32, &str>("bad").map(|x| x + 1).unwrap_or(0), 0);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(val) => val,
            Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error with `f`.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Ok(val) => val,
            Err(err) => f(err),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    /// Panics if the Result is an [`Ok`].
    ///
    /// # Examples
    /// ```
    /// # use standard_result::prelude::*;
    /// let err = Err::<(), String>(String::from("e1")).map_err(|e| e + "!");
    /// assert_eq!(err.unwrap_err(), "e1!");
    /// ```
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Ok(_) => UnwrapErrOnOk.throw(),
            Err(err) => err,
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    /// Panics with `msg` if the Result is an [`Ok`].
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Ok(_) => panic!("{msg}"),
            Err(err) => err,
        }
    }

    /// Returns the success value, panicking with the error's own message if there isn't one.
    ///
    /// # Panics
    /// Panics if the Result is an [`Err`].
    #[track_caller]
    pub fn throw(self) -> T
    where
        E: Error,
    {
        match self {
            Ok(val) => val,
            Err(err) => err.throw(),
        }
    }

    /// Invokes exactly one of the provided handlers, depending on the variant, and returns its
    /// output.
    ///
    /// # Examples
    /// ```
    /// # use standard_result::prelude::*;
    /// use standard_result::result::Match;
    ///
    /// let handlers = Match {
    ///     ok: |val: u32| val.to_string(),
    ///     err: |err: &str| err.to_uppercase(),
    /// };
    /// assert_eq!(Err::<u32, &str>("oops").match_with(handlers), "OOPS");
    /// ```
    pub fn match_with<U, F, G>(self, handlers: Match<F, G>) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Ok(val) => (handlers.ok)(val),
            Err(err) => (handlers.err)(err),
        }
    }

    /// Applies `f` to the success value. An [`Err`] is passed through without invoking `f`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U, E> {
        match self {
            Ok(val) => Ok(f(val)),
            Err(err) => Err(err),
        }
    }

    /// Applies `f` to the error. An [`Ok`] is passed through without invoking `f`.
    pub fn map_err<U, F: FnOnce(E) -> U>(self, f: F) -> Result<T, U> {
        match self {
            Ok(val) => Ok(val),
            Err(err) => Err(f(err)),
        }
    }

    /// Chains a fallible computation onto the success value, returning its Result directly rather
    /// than nesting it. An [`Err`] is passed through without invoking `f`.
    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<U, E> {
        match self {
            Ok(val) => f(val),
            Err(err) => Err(err),
        }
    }

    /// Recovers from an error with another fallible computation. An [`Ok`] is passed through
    /// without invoking `f`.
    pub fn or_else<U, F: FnOnce(E) -> Result<T, U>>(self, f: F) -> Result<T, U> {
        match self {
            Ok(val) => Ok(val),
            Err(err) => f(err),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            core::result::Result::Ok(val) => Ok(val),
            core::result::Result::Err(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(val) => core::result::Result::Ok(val),
            Err(err) => core::result::Result::Err(err),
        }
    }
}

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = Result<Infallible, E>;

    fn from_output(output: T) -> Self {
        Ok(output)
    }

    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Ok(val) => ControlFlow::Continue(val),
            Err(err) => ControlFlow::Break(Err(err)),
        }
    }
}

impl<T, E> Residual<T> for Result<Infallible, E> {
    type TryType = Result<T, E>;
}

impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for Result<T, F> {
    #[track_caller]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Ok(never) => match never {},
            Err(err) => Err(F::from(err)),
        }
    }
}

impl<T, E, F: From<E>> FromResidual<core::result::Result<Infallible, E>> for Result<T, F> {
    #[track_caller]
    fn from_residual(residual: core::result::Result<Infallible, E>) -> Self {
        match residual {
            core::result::Result::Ok(never) => match never {},
            core::result::Result::Err(err) => Err(F::from(err)),
        }
    }
}

impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for core::result::Result<T, F> {
    #[track_caller]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Ok(never) => match never {},
            Err(err) => core::result::Result::Err(F::from(err)),
        }
    }
}
