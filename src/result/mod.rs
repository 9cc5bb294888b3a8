//! A module containing [`Result`], its variants and associated types.
//!
//! [`Result`] is re-exported with its variants [`Ok`] and [`Err`], which double as its
//! constructors. The narrowed variant types [`ResOk`] and [`ResErr`] live here too, as do the
//! errors describing the two ways a Result can be misused.

mod error;
mod result;
#[cfg(feature = "serde")]
mod serialize;
mod tag;
mod variant;

pub use error::*;
pub use result::*;
pub use tag::*;
pub use variant::*;
