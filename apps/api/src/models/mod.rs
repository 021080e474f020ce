pub mod candidate;
pub mod job;

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Reads a field leniently: `null` or a value of the wrong type falls back
/// to the field's default.
///
/// Profiles and postings arrive from a browser form, where unset inputs are
/// sent as `null` and numbers often arrive as strings. Only the enclosing
/// record has to be an object.
pub(crate) fn lenient_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
