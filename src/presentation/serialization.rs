use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Reads the 0/1 integers the API uses for flags.
pub fn bool_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Int(i64),
        Bool(bool),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Int(v) => v != 0,
        Flag::Bool(v) => v,
    })
}

/// Writes a flag back in the API's 0/1 form.
pub fn bool_to_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

/// Renders a value as compact JSON for `Display` impls.
pub(crate) fn write_json<T: Serialize>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    let s = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    write!(f, "{}", s)
}
