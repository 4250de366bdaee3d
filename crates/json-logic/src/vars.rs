//! Data document access. Dotted-path resolution behind `var` and `missing`.

use crate::util;
use crate::value::Value;

/// Converts a `var` path operand to its dotted-path string.
///
/// Numbers become their decimal form so `{"var": 1}` indexes an array;
/// `null` is the empty path.
pub fn path_key(path: &Value) -> String {
    match path {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => util::str_val(other),
    }
}

/// Descends into `data` one `.`-separated segment at a time.
///
/// Object levels are keyed by the segment; array levels by the segment parsed
/// as a non-negative index. The empty path resolves to `data` itself.
pub fn lookup<'v>(data: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return Some(data);
    }
    path.split('.').try_fold(data, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Resolves a `var` operand against the data document.
///
/// Unresolvable paths yield `fallback` (or `null`). A path that resolves to
/// the empty string yields the whole data document.
pub fn resolve_var(path: &Value, fallback: Option<&Value>, data: &Value) -> Value {
    let key = path_key(path);
    if key.is_empty() {
        return data.clone();
    }
    match lookup(data, &key) {
        Some(Value::String(s)) if s.is_empty() => data.clone(),
        Some(value) => value.clone(),
        None => fallback.cloned().unwrap_or(Value::Null),
    }
}

/// Returns true if `path` has no usable value: absent, `null` or `""`.
pub fn is_missing(path: &Value, data: &Value) -> bool {
    match lookup(data, &path_key(path)) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data() -> Value {
        Value::from(json!({
            "a": 1,
            "champ": {"name": "Fezzig", "height": 223},
            "list": ["zero", "one", {"deep": true}],
            "blank": "",
            "nothing": null
        }))
    }

    #[test]
    fn test_lookup_nested_paths() {
        let data = data();
        assert_eq!(lookup(&data, "champ.name"), Some(&Value::from("Fezzig")));
        assert_eq!(lookup(&data, "list.1"), Some(&Value::from("one")));
        assert_eq!(lookup(&data, "list.2.deep"), Some(&Value::Bool(true)));
        assert_eq!(lookup(&data, "list.9"), None);
        assert_eq!(lookup(&data, "list.x"), None);
        assert_eq!(lookup(&data, "a.b"), None);
        assert_eq!(lookup(&data, ""), Some(&data));
    }

    #[test]
    fn test_lookup_array_root() {
        let data = Value::from(json!(["apple", "banana"]));
        assert_eq!(
            resolve_var(&Value::Number(1.0), None, &data),
            Value::from("banana")
        );
    }

    #[test]
    fn test_resolve_var_fallback() {
        let data = data();
        let fallback = Value::Number(26.0);
        assert_eq!(resolve_var(&Value::from("z"), Some(&fallback), &data), fallback);
        assert_eq!(resolve_var(&Value::from("z"), None, &data), Value::Null);
        assert_eq!(resolve_var(&Value::from("nothing"), Some(&fallback), &data), Value::Null);
    }

    #[test]
    fn test_resolve_var_empty_path_returns_document() {
        let data = data();
        assert_eq!(resolve_var(&Value::from(""), None, &data), data);
        assert_eq!(resolve_var(&Value::Null, None, &data), data);
    }

    #[test]
    fn test_resolve_var_empty_string_value_returns_document() {
        let data = data();
        assert_eq!(resolve_var(&Value::from("blank"), None, &data), data);
    }

    #[test]
    fn test_is_missing() {
        let data = data();
        assert!(!is_missing(&Value::from("a"), &data));
        assert!(!is_missing(&Value::from("champ.name"), &data));
        assert!(is_missing(&Value::from("b"), &data));
        assert!(is_missing(&Value::from("blank"), &data));
        assert!(is_missing(&Value::from("nothing"), &data));
    }
}
