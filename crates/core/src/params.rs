//! Helpers for deserializing query-string parameters.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Parse an optional query value, treating an empty value (`?race=`) as absent.
///
/// Use with `#[serde(default, deserialize_with = "empty_as_none")]`. Values
/// are parsed through [`FromStr`], so the field type must accept its own
/// textual form.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "empty_as_none")]
        size: Option<i64>,
    }

    fn parse(json: &str) -> Result<Params, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn empty_and_missing_values_are_none() {
        assert_eq!(parse(r#"{"size": ""}"#).unwrap().size, None);
        assert_eq!(parse("{}").unwrap().size, None);
    }

    #[test]
    fn present_values_are_parsed() {
        assert_eq!(parse(r#"{"size": "12"}"#).unwrap().size, Some(12));
    }

    #[test]
    fn unparsable_values_are_errors() {
        assert!(parse(r#"{"size": "twelve"}"#).is_err());
    }
}
