/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Input normalization.
//!
//! Text input is parsed as JSON when possible. When parsing fails the text is
//! normally kept as a literal text node, except when the parser stopped where
//! an object member name was expected: such input was almost certainly meant
//! to be a JSON object, so the parse error is returned instead.

use serde_json::error::Category;
use serde_json::Value;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::value::{is_falsy, CanonicalValue};

/// Input accepted by the converter.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawInput {
    #[default]
    Empty,
    /// Text that may or may not be JSON.
    Text(String),
    /// An already-parsed JSON value.
    Value(Value),
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        RawInput::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        RawInput::Text(s)
    }
}

impl From<Value> for RawInput {
    fn from(v: Value) -> Self {
        RawInput::Value(v)
    }
}

impl RawInput {
    /// Normalize into a [`CanonicalValue`].
    ///
    /// Empty input, including empty text and empty structured values, becomes
    /// an empty mapping.
    pub fn normalize(self) -> Result<CanonicalValue> {
        match self {
            RawInput::Empty => Ok(CanonicalValue::empty()),
            RawInput::Text(text) if text.is_empty() => Ok(CanonicalValue::empty()),
            RawInput::Text(text) => parse_text(text),
            RawInput::Value(value) if is_falsy(&value) => Ok(CanonicalValue::empty()),
            RawInput::Value(value) => Ok(CanonicalValue::from_json(value)),
        }
    }
}

fn parse_text(text: String) -> Result<CanonicalValue> {
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Ok(CanonicalValue::from_json(value)),
        Err(e) if expects_member_name(&text, &e) => {
            debug!(error = %e, "input looks like a malformed JSON object");
            Err(ConvertError::MalformedJson(e))
        }
        Err(e) => {
            debug!(error = %e, "input is not JSON, treating it as text");
            Ok(CanonicalValue::Text(text))
        }
    }
}

/// Whether the parser failed at a point where an object member name was
/// expected, i.e. right after `{` or after a `,` inside an object.
fn expects_member_name(text: &str, err: &serde_json::Error) -> bool {
    let end = match err.classify() {
        Category::Eof => text.len(),
        Category::Syntax => byte_offset(text, err.line(), err.column()),
        _ => return false,
    };
    awaiting_member_name(&text.as_bytes()[..end])
}

/// Byte offset of the character a serde_json error points at. Columns are
/// 1-based byte counts within the line.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}

/// Scan a JSON prefix and report whether its next token must be a member name.
fn awaiting_member_name(prefix: &[u8]) -> bool {
    let mut containers = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut last = None;

    for &b in prefix {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => containers.push(b),
            b'}' | b']' => {
                containers.pop();
            }
            _ => {}
        }
        if !b.is_ascii_whitespace() {
            last = Some(b);
        }
    }

    !in_string && containers.last() == Some(&b'{') && matches!(last, Some(b'{' | b','))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(text: &str) -> Result<CanonicalValue> {
        RawInput::from(text).normalize()
    }

    #[test]
    fn test_empty_input_is_empty_mapping() {
        assert_eq!(RawInput::Empty.normalize().unwrap(), CanonicalValue::empty());
        assert_eq!(normalize("").unwrap(), CanonicalValue::empty());
        assert_eq!(
            RawInput::from(json!({})).normalize().unwrap(),
            CanonicalValue::empty()
        );
        assert_eq!(
            RawInput::from(json!(null)).normalize().unwrap(),
            CanonicalValue::empty()
        );
    }

    #[test]
    fn test_json_text_is_parsed() {
        let value = normalize(r#"{"items": []}"#).unwrap();
        assert!(value.is_mapping());
        assert_eq!(
            normalize(r#""quoted""#).unwrap(),
            CanonicalValue::Text("quoted".to_string())
        );
        assert_eq!(
            normalize("[1, 2]").unwrap(),
            CanonicalValue::Other(json!([1, 2]))
        );
    }

    #[test]
    fn test_plain_text_falls_back_to_text() {
        for text in [
            "hello world",
            "<b>bold</b>",
            "[1, 2",
            r#"{"a" 1}"#,
            r#"{"a": }"#,
            "{} trailing",
        ] {
            assert_eq!(
                normalize(text).unwrap(),
                CanonicalValue::Text(text.to_string()),
                "{text} should be kept as text"
            );
        }
    }

    #[test]
    fn test_malformed_object_is_an_error() {
        for text in [
            "{bad json",
            "{",
            "{'a': 1}",
            r#"{"a": 1,}"#,
            "{\n  \"a\": 1,\n  oops\n}",
            r#"{"a": {"b": 1, }}"#,
        ] {
            assert!(
                matches!(normalize(text), Err(ConvertError::MalformedJson(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_trailing_comma_in_list_is_text() {
        assert_eq!(
            normalize("[1, 2,]").unwrap(),
            CanonicalValue::Text("[1, 2,]".to_string())
        );
    }

    #[test]
    fn test_awaiting_member_name_ignores_strings() {
        assert!(!awaiting_member_name(br#"{"a{,": "#));
        assert!(awaiting_member_name(br#"{"a{,": "x\"", "#));
        assert!(!awaiting_member_name(br#"[{"a": 1}, "#));
    }

    #[test]
    fn test_byte_offset() {
        let text = "{\n  oops";
        assert_eq!(byte_offset(text, 2, 3), 4);
        assert_eq!(byte_offset(text, 1, 1), 0);
        assert_eq!(byte_offset(text, 9, 99), text.len());
    }
}
