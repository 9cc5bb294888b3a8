//! A module containing [`Option`], its variants and associated types.
//!
//! [`Option`] is the companion of [`Result`](crate::result::Result): it is what
//! [`Result::ok`](crate::result::Result::ok) and [`Result::err`](crate::result::Result::err)
//! project into. The variants [`Some`] and [`None`] are exported alongside the type so that they
//! can be used as constructors, the same way as the std prelude does it.

mod error;
mod option;
#[cfg(feature = "serde")]
mod serialize;

pub use error::*;
pub use option::*;

mod tests;
