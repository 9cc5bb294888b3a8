use std::str::FromStr;

use derive_more::{Display, IsVariant};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::inspect::NotAResult;

/// The discriminant of a [`Result`](super::Result), displayed as the marker used to recognise
/// Results in untyped data: `:ok` or `:err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tag {
    #[display(":ok")]
    #[cfg_attr(feature = "serde", serde(rename = ":ok"))]
    Ok,
    #[display(":err")]
    #[cfg_attr(feature = "serde", serde(rename = ":err"))]
    Err,
}

impl FromStr for Tag {
    type Err = NotAResult;

    fn from_str(marker: &str) -> Result<Self, NotAResult> {
        match marker {
            ":ok" => Ok(Tag::Ok),
            ":err" => Ok(Tag::Err),
            _ => Err(NotAResult),
        }
    }
}
