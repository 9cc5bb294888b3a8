//! This crate is my take on the two algebraic types that hold most Rust code together: [`Option`]
//! and [`Result`].
//!
//! # Purpose
//! The std versions are so pervasive that it's easy to forget that they're ordinary enums with a
//! handful of combinators on top. Writing them again, from the contract up, is a good way to
//! understand why they look the way they do.
//!
//! # Method
//! Both types are plain enums, and every combinator is a `match` on the variant. There are no
//! trait objects or closures stored inside of a value. The variants are exported next to their
//! types so they can be used as constructors, and [`prelude`] exports all of them at once,
//! shadowing the std prelude.
//!
//! [`Result`] can also be narrowed to [`ResOk`](result::ResOk) or [`ResErr`](result::ResErr) once
//! the variant is known. The narrowed types only expose the operations that make sense for that
//! variant, so the misuse cases of [`Result`] don't compile rather than panicking.
//!
//! # Error Handling
//! There are exactly two ways to misuse a [`Result`]: unwrapping the success value of an [`Err`],
//! or the error of an [`Ok`]. (Plus unwrapping a [`None`], on the [`Option`] side.) These are
//! contract violations, so they panic, with the message of a zero-sized error type
//! ([`UnwrapOnErr`](result::UnwrapOnErr), [`UnwrapErrOnOk`](result::UnwrapErrOnOk),
//! [`UnwrapOnNone`](option::UnwrapOnNone)). Every other operation is total.
//!
//! The [`inspect`] module is for values which arrive without a type, where "is this a Result?" is
//! a legitimate question. Those predicates report [`NotAResult`](inspect::NotAResult) as an error
//! instead of panicking.
//!
//! # Dependencies
//! This crate requires nightly, for `try_trait_v2` and `try_trait_v2_residual`, so that `?` works
//! on both types (and across them and their std counterparts).
//!
//! With the `serde` feature (on by default), both types can be serialized and Results can be
//! recognised in untyped JSON via [`inspect::json`]. The inspection module logs the values it
//! rejects through `tracing`.
//!
//! The error types use derive macros because they're helpful and remove the need for some very
//! repetitive programming.
#![feature(try_trait_v2)]
#![feature(try_trait_v2_residual)]
#![feature(const_precise_live_drops)]

// #![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod inspect;
pub mod option;
pub mod result;

pub(crate) mod util;

pub use option::{None, Option, Some};
pub use result::{Err, Ok, Result};

/// Exports [`Option`], [`Result`] and their variants, shadowing the ones in the std prelude.
///
/// ```
/// use standard_result::prelude::*;
///
/// let res: Result<u8, &str> = Ok(1);
/// assert_eq!(res.ok(), Some(1));
/// ```
pub mod prelude {
    pub use crate::option::{None, Option, Some};
    pub use crate::result::{Err, Ok, Result};
}
