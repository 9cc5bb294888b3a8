use std::any::{self, Any};

use tracing::trace;

use super::NotAResult;
use crate::result::Result::{self, Err, Ok};

/// Returns whether `value` is a `Result<T, E>`.
///
/// The check is on the exact type, so this is `false` for a Result with other payload types (a
/// `Result<u8, String>` asked about as `Result<i32, String>`) and for a std `Result`.
///
/// # Examples
/// ```
/// # use standard_result::prelude::*;
/// use standard_result::inspect;
///
/// let value: Box<dyn std::any::Any> = Box::new(Ok::<u8, String>(1));
/// assert!(inspect::is_result::<u8, String>(&*value));
/// assert!(!inspect::is_result::<i32, String>(&*value));
/// assert!(!inspect::is_result::<u8, String>(&5_u8));
/// ```
pub fn is_result<T: 'static, E: 'static>(value: &dyn Any) -> bool {
    value.is::<Result<T, E>>()
}

/// Returns whether `value` is an [`Ok`], after checking that it is a `Result<T, E>` at all.
///
/// # Errors
/// Returns [`NotAResult`] if `value` isn't a `Result<T, E>`.
pub fn is_ok<T: 'static, E: 'static>(value: &dyn Any) -> Result<bool, NotAResult> {
    downcast_ref::<T, E>(value).map(|result| result.is_ok())
}

/// Returns whether `value` is an [`Err`], after checking that it is a `Result<T, E>` at all.
///
/// # Errors
/// Returns [`NotAResult`] if `value` isn't a `Result<T, E>`.
pub fn is_err<T: 'static, E: 'static>(value: &dyn Any) -> Result<bool, NotAResult> {
    downcast_ref::<T, E>(value).map(|result| result.is_err())
}

/// Borrows `value` as a `Result<T, E>`.
///
/// # Errors
/// Returns [`NotAResult`] if `value` isn't a `Result<T, E>`.
pub fn downcast_ref<T: 'static, E: 'static>(value: &dyn Any) -> Result<&Result<T, E>, NotAResult> {
    match value.downcast_ref::<Result<T, E>>() {
        Some(result) => Ok(result),
        None => {
            trace!(expected = any::type_name::<Result<T, E>>(), "value is not a Result");
            Err(NotAResult)
        }
    }
}

/// Takes ownership of `value` as a `Result<T, E>`.
///
/// # Errors
/// Hands `value` back unchanged if it isn't a `Result<T, E>`.
pub fn downcast<T: 'static, E: 'static>(value: Box<dyn Any>) -> Result<Result<T, E>, Box<dyn Any>> {
    match value.downcast::<Result<T, E>>() {
        core::result::Result::Ok(result) => Ok(*result),
        core::result::Result::Err(value) => {
            trace!(expected = any::type_name::<Result<T, E>>(), "value is not a Result");
            Err(value)
        }
    }
}
