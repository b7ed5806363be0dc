//! Order-preserving decoding of one JSON log event.
//!
//! Decodes a flat JSON object into an [`Event`] whose iteration order equals
//! the field order the producer wrote. Values are kept close to their wire
//! form: strings are unescaped, numbers keep their exact textual
//! representation, and everything else stays a verbatim span that is emitted
//! literally and never re-parsed.

use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde_json::value::RawValue;

use crate::error::DecodeError;

/// One decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A fully unescaped string.
    String(String),
    /// The original numeric text, verbatim. Arbitrary precision survives and
    /// no float round-trip ever happens.
    Number(String),
    /// A verbatim span: booleans, null, arrays, nested objects.
    Raw(String),
}

impl Value {
    /// Classify a raw top-level span by its first byte.
    fn from_raw(raw: &RawValue) -> Result<Self, serde_json::Error> {
        let span = raw.get();
        match span.as_bytes().first() {
            Some(b'"') => Ok(Self::String(serde_json::from_str(span)?)),
            Some(b'-' | b'0'..=b'9') => Ok(Self::Number(span.to_owned())),
            _ => Ok(Self::Raw(span.to_owned())),
        }
    }

    /// The unescaped text for strings, the verbatim span otherwise.
    pub fn text(&self) -> &str {
        match self {
            Self::String(s) | Self::Number(s) | Self::Raw(s) => s,
        }
    }

    /// The unescaped text when this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// One decoded log event: an insertion-ordered field map.
///
/// Iteration yields fields in first-seen key order. Re-setting a key that is
/// already present updates its value in place without moving it, so a
/// repeated key in the source object keeps its first position and takes its
/// last value.
#[derive(Debug, Default)]
pub struct Event {
    entries: Vec<(String, Value)>,
}

impl Event {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or update a field. Events are small, so a linear probe over the
    /// key vector beats maintaining a separate hash index.
    pub fn set(&mut self, name: String, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Fields in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EventVisitor;

        impl<'de> Visitor<'de> for EventVisitor {
            type Value = Event;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Event, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut event = Event::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, raw)) = access.next_entry::<String, &RawValue>()? {
                    let value = Value::from_raw(raw).map_err(de::Error::custom)?;
                    event.set(name, value);
                }
                Ok(event)
            }
        }

        deserializer.deserialize_map(EventVisitor)
    }
}

/// Decode one event from its JSON bytes.
///
/// Fails when the input is not UTF-8 or not a single well-formed JSON object.
/// A single pass over the top-level object; nested structures are captured as
/// verbatim spans without recursing into them.
pub fn decode(input: &[u8]) -> Result<Event, DecodeError> {
    let text = std::str::from_utf8(input)?;
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let event = decode(br#"{"zebra":1,"alpha":2,"middle":3}"#).unwrap();
        let names: Vec<&str> = event.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_duplicate_key_updates_value_keeps_position() {
        let event = decode(br#"{"a":"first","b":"x","a":"second"}"#).unwrap();
        let names: Vec<&str> = event.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(event.get("a"), Some(&Value::String("second".to_owned())));
    }

    #[test]
    fn test_string_values_are_unescaped() {
        let event = decode(br#"{"msg":"line\nbreak \"quoted\""}"#).unwrap();
        assert_eq!(
            event.get("msg"),
            Some(&Value::String("line\nbreak \"quoted\"".to_owned()))
        );
    }

    #[test]
    fn test_number_text_is_verbatim() {
        let event = decode(br#"{"f":1.10,"big":123456789012345678901234567890,"e":1e5}"#).unwrap();
        assert_eq!(event.get("f"), Some(&Value::Number("1.10".to_owned())));
        assert_eq!(
            event.get("big"),
            Some(&Value::Number("123456789012345678901234567890".to_owned()))
        );
        assert_eq!(event.get("e"), Some(&Value::Number("1e5".to_owned())));
    }

    #[test]
    fn test_negative_number() {
        let event = decode(br#"{"n":-42}"#).unwrap();
        assert_eq!(event.get("n"), Some(&Value::Number("-42".to_owned())));
    }

    #[test]
    fn test_raw_spans_kept_verbatim() {
        let event =
            decode(br#"{"ok":true,"none":null,"tags":[1, 2, 3],"nested":{"a": 1}}"#).unwrap();
        assert_eq!(event.get("ok"), Some(&Value::Raw("true".to_owned())));
        assert_eq!(event.get("none"), Some(&Value::Raw("null".to_owned())));
        assert_eq!(event.get("tags"), Some(&Value::Raw("[1, 2, 3]".to_owned())));
        assert_eq!(
            event.get("nested"),
            Some(&Value::Raw(r#"{"a": 1}"#.to_owned()))
        );
    }

    #[test]
    fn test_top_level_array_is_an_error() {
        assert!(decode(b"[1,2,3]").is_err());
    }

    #[test]
    fn test_top_level_scalar_is_an_error() {
        assert!(decode(b"42").is_err());
        assert!(decode(br#""hello""#).is_err());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(decode(br#"{"a":}"#).is_err());
        assert!(decode(b"").is_err());
    }

    #[test]
    fn test_trailing_garbage_is_an_error() {
        assert!(decode(br#"{"a":1} {"b":2}"#).is_err());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        assert!(matches!(
            decode(b"{\"a\":\"\xff\"}"),
            Err(DecodeError::Utf8(_))
        ));
    }

    #[test]
    fn test_empty_object() {
        let event = decode(b"{}").unwrap();
        assert!(event.is_empty());
        assert_eq!(event.len(), 0);
    }

    #[test]
    fn test_value_text() {
        assert_eq!(Value::String("a b".to_owned()).text(), "a b");
        assert_eq!(Value::Number("1.5".to_owned()).text(), "1.5");
        assert_eq!(Value::Raw("[1]".to_owned()).text(), "[1]");
    }

    #[test]
    fn test_value_as_str() {
        assert_eq!(Value::String("x".to_owned()).as_str(), Some("x"));
        assert_eq!(Value::Number("1".to_owned()).as_str(), None);
        assert_eq!(Value::Raw("true".to_owned()).as_str(), None);
    }
}
