//! Serde helper functions for CMS payload deserialization.
//!
//! The CMS stores "unset" values inconsistently: an optional text field may
//! come back as `null`, as a missing key, or as an empty string, and numeric
//! style fields use `0` for "not configured". These helpers collapse all of
//! those to `None` so the document model only carries real values.
//!
//! Optional fields are display hints. A value of the wrong JSON type is
//! treated as unset rather than failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::asset::ImageRef;

/// Deserialize an optional string, treating empty strings and non-strings
/// as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = deserialize_lenient_string(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserialize an optional string as authored, treating non-strings as None.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Reads an integer from a number or a numeric string.
fn lenient_integer(value: Option<Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Deserialize an optional integer. Numeric strings are accepted; anything
/// else is None.
pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_integer(Option::deserialize(deserializer)?))
}

/// Deserialize an optional unsigned number, treating zero as None.
///
/// Numeric strings are accepted; negative, out of range and non-numeric
/// values are None.
pub fn deserialize_optional_nonzero<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let n = lenient_integer(Option::deserialize(deserializer)?);
    Ok(n.and_then(|n| u32::try_from(n).ok()).filter(|n| *n != 0))
}

/// Deserialize an optional file relation.
///
/// Expanded relations are objects; anything else (`null`, an unexpanded file
/// id, `false`) means there is no usable file and yields None.
pub fn deserialize_optional_image<'de, D>(deserializer: D) -> Result<Option<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        Some(value @ Value::Object(_)) => ImageRef::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
