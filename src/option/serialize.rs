use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{None, Option, Some};

/// Serialized the same way as [`core::option::Option`]: `null` for [`None`], the bare value for
/// [`Some`].
impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Some(val) => serializer.serialize_some(val),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        core::option::Option::<T>::deserialize(deserializer).map(Option::from)
    }
}
