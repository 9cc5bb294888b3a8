use std::convert::Infallible;
use std::ops::{ControlFlow, FromResidual, Residual, Try};

use derive_more::IsVariant;

use super::UnwrapOnNone;
use crate::result::Result::{self, Err, Ok};
use crate::util::result::Throw;

pub use self::Option::{None, Some};

/// A value which is either present ([`Some`]) or absent ([`None`]).
///
/// This is the optional counterpart to [`Result`], used as the projection of either side of a
/// Result via [`Result::ok`] and [`Result::err`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Option<T> {
    /// No value.
    #[default]
    None,
    /// Some value of type `T`.
    Some(T),
}

/// A pair of handlers for [`Option::match_with`], one per variant.
#[derive(Debug, Clone, Copy)]
pub struct Match<F, G> {
    pub some: F,
    pub none: G,
}

impl<T> Option<T> {
    /// Converts from `&Option<T>` to `Option<&T>`.
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Some(val) => Some(val),
            None => None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    pub const fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Some(val) => Some(val),
            None => None,
        }
    }

    /// Returns whether the Option is [`Some`] and the value inside of it matches a predicate.
    pub fn is_some_and<F: FnOnce(T) -> bool>(self, f: F) -> bool {
        match self {
            Some(val) => f(val),
            None => false,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics if the Option is [`None`].
    ///
    /// # Examples
    /// ```
    /// # use standard_result::prelude::*;
    /// assert_eq!(Some(3).unwrap(), 3);
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Some(val) => val,
            None => UnwrapOnNone.throw(),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// Panics with `msg` if the Option is [`None`].
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Some(val) => val,
            None => panic!("{msg}"),
        }
    }

    /// Returns the contained value or `default` if there isn't one.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(val) => val,
            None => default,
        }
    }

    /// Returns the contained value or computes one with `f`.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Some(val) => val,
            None => f(),
        }
    }

    /// Invokes exactly one of the provided handlers, depending on the variant.
    ///
    /// # Examples
    /// ```
    /// # use standard_result::prelude::*;
    /// use standard_result::option::Match;
    ///
    /// let len = Some("four").match_with(Match {
    ///     some: |s: &str| s.len(),
    ///     none: || 0,
    /// });
    /// assert_eq!(len, 4);
    /// ```
    pub fn match_with<U, F, G>(self, handlers: Match<F, G>) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Some(val) => (handlers.some)(val),
            None => (handlers.none)(),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        match self {
            Some(val) => Some(f(val)),
            None => None,
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        match self {
            Some(val) => f(val),
            None => None,
        }
    }

    pub fn or_else<F: FnOnce() -> Option<T>>(self, f: F) -> Option<T> {
        match self {
            Some(val) => Some(val),
            None => f(),
        }
    }

    /// Transforms the Option into a [`Result`], mapping [`None`] to `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(val) => Ok(val),
            None => Err(err),
        }
    }

    pub fn ok_or_else<E, F: FnOnce() -> E>(self, f: F) -> Result<T, E> {
        match self {
            Some(val) => Ok(val),
            None => Err(f()),
        }
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            core::option::Option::Some(val) => Some(val),
            core::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => core::option::Option::Some(val),
            None => core::option::Option::None,
        }
    }
}

impl<T> Try for Option<T> {
    type Output = T;
    type Residual = Option<Infallible>;

    fn from_output(output: T) -> Self {
        Some(output)
    }

    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Some(val) => ControlFlow::Continue(val),
            None => ControlFlow::Break(None),
        }
    }
}

impl<T> Residual<T> for Option<Infallible> {
    type TryType = Option<T>;
}

impl<T> FromResidual<Option<Infallible>> for Option<T> {
    fn from_residual(_residual: Option<Infallible>) -> Self {
        None
    }
}

impl<T> FromResidual<core::option::Option<Infallible>> for Option<T> {
    fn from_residual(_residual: core::option::Option<Infallible>) -> Self {
        None
    }
}
