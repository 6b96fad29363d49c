//! Serde helpers for runes stored as integer code points.
//!
//! `char` serializes as a string in JSON, so runes are converted to and from
//! their `u32` code point explicitly. Values that are not Unicode scalar values
//! (surrogates, anything above `char::MAX`) are rejected on decode.

use serde::de::{self, MapAccess};
use serde::ser::Serializer;

pub(crate) fn serialize<S>(rune: &char, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u32(u32::from(*rune))
}

/// Read the next map value as a code point. `null` yields `None`.
pub(crate) fn next_value<'de, A>(access: &mut A) -> Result<Option<char>, A::Error>
where
    A: MapAccess<'de>,
{
    access
        .next_value::<Option<u32>>()?
        .map(from_code_point::<A::Error>)
        .transpose()
}

pub(crate) fn from_code_point<E: de::Error>(code_point: u32) -> Result<char, E> {
    char::from_u32(code_point)
        .ok_or_else(|| E::custom(format_args!("{:#x} is not a Unicode scalar value", code_point)))
}

/// Glyph-set keys are the canonical decimal form of the code point: no sign
/// and no leading zeros, so every rune has exactly one key.
pub(crate) fn to_key(rune: char) -> String {
    u32::from(rune).to_string()
}

pub(crate) fn from_key<E: de::Error>(key: &str) -> Result<char, E> {
    let invalid = || E::custom(format_args!("glyph key {:?} is not a decimal code point", key));

    let canonical = !key.starts_with('+') && (key == "0" || !key.starts_with('0'));
    if !canonical {
        return Err(invalid());
    }
    let code_point = key.parse::<u32>().map_err(|_| invalid())?;
    from_code_point(code_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Error = serde_json::Error;

    #[test]
    fn test_key_format() {
        assert_eq!(to_key('A'), "65");
        assert_eq!(to_key('\u{4E00}'), "19968");
        assert_eq!(from_key::<Error>("65").unwrap(), 'A');
        assert_eq!(from_key::<Error>("0").unwrap(), '\0');
    }

    #[test]
    fn test_rejects_bad_keys() {
        assert!(from_key::<Error>("A").is_err());
        assert!(from_key::<Error>("-1").is_err());
        assert!(from_key::<Error>("0x41").is_err());
        assert!(from_key::<Error>("").is_err());
        // Non-canonical spellings of 65
        assert!(from_key::<Error>("+65").is_err());
        assert!(from_key::<Error>("065").is_err());
        assert!(from_key::<Error>("00").is_err());
        assert!(from_key::<Error>(" 65").is_err());
        // Surrogate half
        assert!(from_key::<Error>("55296").is_err());
        assert!(from_key::<Error>("1114112").is_err());
    }
}
