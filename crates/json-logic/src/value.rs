//! The dynamic runtime value every rule literal, data lookup and operator
//! result is expressed in.

use serde::{Serialize, Serializer};
use serde_json::Value as Json;
use std::collections::BTreeMap;
use std::fmt;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A JsonLogic value.
///
/// Numbers are always 64-bit floats, so `26` read from a rule and `26.0`
/// produced by arithmetic are the same value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

/// Shared `null`, for optional operands that were not supplied.
pub static NULL: Value = Value::Null;

/// Runtime type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Encodes the value as a JSON tree.
    ///
    /// Integral numbers within the exactly-representable range become JSON
    /// integers; NaN and the infinities become `null`, as `JSON.stringify` does.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

fn number_to_json(n: f64) -> Json {
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        return Json::Number(serde_json::Number::from(n as i64));
    }
    match serde_json::Number::from_f64(n) {
        Some(num) => Json::Number(num),
        None => Json::Null,
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        Value::from(json.clone())
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_and_floats_are_one_number_type() {
        assert_eq!(Value::from(json!(26)), Value::Number(26.0));
        assert_eq!(Value::from(json!(26.0)), Value::Number(26.0));
    }

    #[test]
    fn test_integral_numbers_encode_as_integers() {
        assert_eq!(Value::Number(10.0).to_json(), json!(10));
        assert_eq!(Value::Number(-2.0).to_json(), json!(-2));
        assert_eq!(Value::Number(0.25).to_json(), json!(0.25));
    }

    #[test]
    fn test_non_finite_numbers_encode_as_null() {
        assert_eq!(Value::Number(f64::INFINITY).to_json(), json!(null));
        assert_eq!(Value::Number(f64::NAN).to_json(), json!(null));
    }

    #[test]
    fn test_nested_conversion() {
        let json = json!({"a": [1, "two", null, {"b": true}]});
        let value = Value::from(json.clone());
        assert_eq!(value.kind(), ValueKind::Object);
        assert_eq!(value.to_json(), json);
    }

    #[test]
    fn test_accessors() {
        let value = Value::from(json!([1.5, "x", null]));
        let items = value.as_array().unwrap();
        assert_eq!(items[0].as_f64(), Some(1.5));
        assert_eq!(items[1].as_str(), Some("x"));
        assert!(items[2].is_null());
        assert_eq!(items[1].as_f64(), None);
        assert_eq!(items[0].as_str(), None);
        assert!(Value::from("x").as_array().is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind().name(), "null");
        assert_eq!(Value::Bool(true).kind().name(), "boolean");
        assert_eq!(Value::from(json!({})).kind().name(), "object");
        assert_eq!(Value::from(json!([])).kind().name(), "array");
    }

    #[test]
    fn test_display_is_json_text() {
        let value = Value::Array(vec![Value::from(1.5), Value::from("x")]);
        assert_eq!(value.to_string(), r#"[1.5,"x"]"#);
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let value = Value::from(json!({"n": 3}));
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"n":3}"#);
    }
}
