use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::Tag;

/// The serialized shape of a [`Result`](super::Result): `{"type": ":ok", "value": ...}` or
/// `{"type": ":err", "value": ...}`. The `type` markers are the [`Tag`] displays.
#[derive(Serialize)]
#[serde(tag = "type", content = "value")]
enum TaggedRef<'a, T, E> {
    #[serde(rename = ":ok")]
    Ok(&'a T),
    #[serde(rename = ":err")]
    Err(&'a E),
}

impl<T: Serialize, E: Serialize> Serialize for super::Result<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tagged = match self {
            super::Ok(val) => TaggedRef::Ok(val),
            super::Err(err) => TaggedRef::Err(err),
        };
        tagged.serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "lowercase")]
enum Field {
    Type,
    Value,
    #[serde(other)]
    Other,
}

/// Only accepts the object shape written by [`Serialize`], with both `type` and `value` present,
/// in either order. Unknown fields are ignored.
struct ResultVisitor<T, E>(PhantomData<(T, E)>);

impl<'de, T, E> Visitor<'de> for ResultVisitor<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = super::Result<T, E>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("an object with `type` and `value` fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut tag = None;
        let mut result = None;
        let mut buffered = None;

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Type => {
                    if tag.is_some() {
                        return Err(de::Error::duplicate_field("type"));
                    }
                    tag = Some(map.next_value::<Tag>()?);
                }
                Field::Value => {
                    if result.is_some() || buffered.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    match tag {
                        Some(Tag::Ok) => result = Some(super::Ok(map.next_value()?)),
                        Some(Tag::Err) => result = Some(super::Err(map.next_value()?)),
                        // The payload type isn't known until the tag shows up.
                        None => buffered = Some(map.next_value::<Value>()?),
                    }
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let tag = tag.ok_or_else(|| de::Error::missing_field("type"))?;
        match (result, buffered) {
            (Some(result), _) => Ok(result),
            (None, Some(value)) => payload_from_value(tag, value),
            (None, None) => Err(de::Error::missing_field("value")),
        }
    }
}

fn payload_from_value<'de, T, E, Er>(tag: Tag, value: Value) -> Result<super::Result<T, E>, Er>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
    Er: de::Error,
{
    match tag {
        Tag::Ok => T::deserialize(value).map(super::Ok),
        Tag::Err => E::deserialize(value).map(super::Err),
    }
    .map_err(Er::custom)
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for super::Result<T, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResultVisitor(PhantomData))
    }
}
