/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The normalized value model the converter dispatches on.

use serde_json::{Map, Value};

/// A normalized input value.
///
/// Lists are deliberately not a variant of their own: they fall into
/// [`CanonicalValue::Other`] and are rendered as their literal JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    /// Literal text, escaped on output when escaping is enabled.
    Text(String),
    /// A JSON object; rendered through the citation formatter.
    Mapping(Map<String, Value>),
    /// Anything else, rendered verbatim.
    Other(Value),
}

impl CanonicalValue {
    /// Classify an already-parsed JSON value.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => CanonicalValue::Text(s),
            Value::Object(map) => CanonicalValue::Mapping(map),
            other => CanonicalValue::Other(other),
        }
    }

    pub fn empty() -> Self {
        CanonicalValue::Mapping(Map::new())
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, CanonicalValue::Mapping(_))
    }
}

impl Default for CanonicalValue {
    fn default() -> Self {
        Self::empty()
    }
}

/// Whether a value counts as empty: null, `false`, zero, `""`, `[]` or `{}`.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_classifies_variants() {
        assert_eq!(
            CanonicalValue::from_json(json!("hi")),
            CanonicalValue::Text("hi".to_string())
        );
        assert!(CanonicalValue::from_json(json!({"items": []})).is_mapping());
        assert_eq!(
            CanonicalValue::from_json(json!([1, 2])),
            CanonicalValue::Other(json!([1, 2]))
        );
        assert_eq!(
            CanonicalValue::from_json(json!(42)),
            CanonicalValue::Other(json!(42))
        );
    }

    #[test]
    fn test_is_falsy() {
        for value in [json!(null), json!(""), json!([]), json!({}), json!(false), json!(0)] {
            assert!(is_falsy(&value), "{value} should be falsy");
        }
        for value in [json!(" "), json!([null]), json!({"a": 1}), json!(true), json!(2021)] {
            assert!(!is_falsy(&value), "{value} should not be falsy");
        }
    }
}
