use derive_more::{Display, Error};
#[cfg(feature = "serde")]
use derive_more::{From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("value is not a Result")]
pub struct NotAResult;

/// An error produced when reading a [`Result`](crate::result::Result) out of untyped JSON.
#[cfg(feature = "serde")]
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum FromValueError {
    NotAResult(NotAResult),
    Payload(serde_json::Error),
}
