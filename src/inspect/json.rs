//! Recognising [`Result`]s in untyped JSON.
//!
//! A Result is serialized as an object with a `type` marker and a `value` payload:
//! ```json
//! { "type": ":ok", "value": 5 }
//! { "type": ":err", "value": "bad" }
//! ```
//! Anything else, including an object with an unknown marker or no payload, isn't a Result.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use super::{FromValueError, NotAResult};
use crate::result::Result::{self, Err, Ok};
use crate::result::Tag;

/// Reads the [`Tag`] of a serialized Result.
///
/// # Errors
/// Returns [`NotAResult`] if `value` doesn't have the shape of a serialized Result.
pub fn tag_of(value: &Value) -> Result<Tag, NotAResult> {
    let tag = value
        .as_object()
        .filter(|fields| fields.contains_key("value"))
        .and_then(|fields| fields.get("type"))
        .and_then(Value::as_str)
        .and_then(|marker| marker.parse::<Tag>().ok());

    match tag {
        Some(tag) => Ok(tag),
        None => {
            trace!(%value, "value is not a Result");
            Err(NotAResult)
        }
    }
}

/// Returns whether `value` has the shape of a serialized Result.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use standard_result::inspect::json;
///
/// assert!(json::is_result(&json!({ "type": ":ok", "value": 5 })));
/// assert!(!json::is_result(&json!({ "type": ":maybe", "value": 5 })));
/// assert!(!json::is_result(&json!(null)));
/// ```
pub fn is_result(value: &Value) -> bool {
    tag_of(value).is_ok()
}

/// Returns whether `value` is a serialized [`Ok`].
///
/// # Errors
/// Returns [`NotAResult`] if `value` doesn't have the shape of a serialized Result.
pub fn is_ok(value: &Value) -> Result<bool, NotAResult> {
    tag_of(value).map(|tag| tag.is_ok())
}

/// Returns whether `value` is a serialized [`Err`].
///
/// # Errors
/// Returns [`NotAResult`] if `value` doesn't have the shape of a serialized Result.
pub fn is_err(value: &Value) -> Result<bool, NotAResult> {
    tag_of(value).map(|tag| tag.is_err())
}

/// Checks that `value` is a serialized Result, then deserializes it.
///
/// # Errors
/// Returns [`FromValueError::NotAResult`] for a value that isn't shaped like a Result and
/// [`FromValueError::Payload`] if the payload doesn't deserialize into `T` or `E`.
pub fn from_value<T, E>(value: Value) -> Result<Result<T, E>, FromValueError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    let tag = tag_of(&value)?;
    let result = serde_json::from_value::<Result<T, E>>(value).map_err(|err| {
        debug!(%tag, %err, "rejected Result with a malformed payload");
        err
    })?;
    Ok(result)
}
