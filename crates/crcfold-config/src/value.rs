//! 32-bit values written as `0x`-prefixed hex or plain decimal.
//!
//! TOML hands the loader integers, but environment variables arrive as
//! strings, and `0xEDB88320` in an env var is not an integer to the `config`
//! crate. Both forms go through [`parse_u32`].

use serde::{Deserialize, Deserializer};

/// Parses `0x`-prefixed hex or plain decimal into a `u32`.
///
/// Surrounding whitespace and `_` digit separators are ignored.
pub fn parse_u32(value: &str) -> Result<u32, String> {
    let value = value.trim().replace('_', "");
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid 32-bit value {value:?}: {e}"))
}

/// A `u32` as it can appear in any config layer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawU32 {
    Integer(i64),
    Text(String),
}

/// Deserializes an integer, or a string accepted by [`parse_u32`].
pub(crate) fn deserialize_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match RawU32::deserialize(deserializer)? {
        RawU32::Integer(value) => u32::try_from(value)
            .map_err(|_| serde::de::Error::custom(format!("{value} is out of range for a u32"))),
        RawU32::Text(text) => parse_u32(&text).map_err(serde::de::Error::custom),
    }
}
