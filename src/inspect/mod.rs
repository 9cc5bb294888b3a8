//! Predicates for checking whether a value of unknown provenance is a [`Result`].
//!
//! Code that stays within the type system never needs these: a [`Result`] is constructed through
//! [`Ok`] or [`Err`] and its type says what it is. They exist for trust boundaries, where a value
//! arrives type-erased (as a [`dyn Any`](std::any::Any)) or untyped (as JSON, see [`json`]).
//!
//! [`is_result`] only answers the question. [`is_ok`] and [`is_err`] also check the value is a
//! Result first, and report [`NotAResult`] otherwise, rather than answering for something that
//! isn't one.
//!
//! [`Result`]: crate::result::Result
//! [`Ok`]: crate::result::Ok
//! [`Err`]: crate::result::Err

mod any;
mod error;
#[cfg(feature = "serde")]
pub mod json;

pub use any::*;
pub use error::*;

mod tests;
