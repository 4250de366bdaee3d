//! Type coercion helpers: JavaScript-style conversions between [`Value`] kinds.

use crate::value::Value;

// ----------------------------------------------------------------- Truthiness

/// Returns the boolean interpretation of a value.
///
/// Arrays are always truthy, including the empty array.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ----------------------------------------------------------------- Numbers

/// Parses a numeric literal the way `Number(string)` would, but yields `None`
/// instead of NaN.
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Converts a value to a number. Anything that does not convert yields `0`.
pub fn num(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => {
            if n.is_nan() {
                0.0
            } else {
                *n
            }
        }
        Value::String(s) => parse_number(s).unwrap_or(0.0),
        Value::Array(_) | Value::Object(_) => parse_number(&str_val(value)).unwrap_or(0.0),
    }
}

/// Truncates a value to an integer.
pub fn int(value: &Value) -> i64 {
    num(value).trunc() as i64
}

/// Returns true iff the string form of the value parses as a float.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(n) => !n.is_nan(),
        Value::String(s) => parse_number(s).is_some(),
        Value::Null | Value::Bool(_) => false,
        Value::Array(_) | Value::Object(_) => parse_number(&str_val(value)).is_some(),
    }
}

// ----------------------------------------------------------------- Strings

/// Formats a number as JavaScript's `String(n)` does.
///
/// Magnitudes outside `[1e-6, 1e21)` use exponent form (`1e+21`, `1.5e-7`).
pub fn num_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    // Display prints the shortest round-trip digits without an exponent.
    n.to_string()
}

/// Converts a value to a string. Mirrors JavaScript `String(value)`.
pub fn str_val(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => num_to_string(*n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => str_val(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// String form used by loose equality: booleans compare as `"1"` / `"0"`.
fn loose_key(value: &Value) -> String {
    match value {
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        other => str_val(other),
    }
}

// ----------------------------------------------------------------- Equality

/// Loose (`==`) equality: both operands are stringified and compared.
///
/// `null` is only loosely equal to `null`.
pub fn soft_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        _ => loose_key(a) == loose_key(b),
    }
}

/// Strict (`===`) equality: same runtime kind and same value.
pub fn hard_equal(a: &Value, b: &Value) -> bool {
    a.kind() == b.kind() && a == b
}

// ----------------------------------------------------------------- Ordering

/// Numeric `a < b`; false unless both operands are numeric.
pub fn less(a: &Value, b: &Value) -> bool {
    is_numeric(a) && is_numeric(b) && num(a) < num(b)
}

/// Numeric `a <= b`; false unless both operands are numeric.
pub fn less_eq(a: &Value, b: &Value) -> bool {
    is_numeric(a) && is_numeric(b) && num(a) <= num(b)
}

/// Exclusive range test `a < b < c`.
pub fn between_exclusive(a: &Value, b: &Value, c: &Value) -> bool {
    less(a, b) && less(b, c)
}

/// Inclusive range test `a <= b <= c`.
pub fn between_inclusive(a: &Value, b: &Value, c: &Value) -> bool {
    less_eq(a, b) && less_eq(b, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_truthy() {
        assert!(is_truthy(&v(json!([]))));
        assert!(is_truthy(&v(json!([0]))));
        assert!(is_truthy(&v(json!({}))));
        assert!(is_truthy(&v(json!("0"))));
        assert!(is_truthy(&v(json!(-1))));
        assert!(!is_truthy(&v(json!(0))));
        assert!(!is_truthy(&v(json!(""))));
        assert!(!is_truthy(&v(json!(null))));
        assert!(!is_truthy(&v(json!(false))));
        assert!(!is_truthy(&Value::Number(f64::NAN)));
    }

    #[test]
    fn test_num() {
        assert_eq!(num(&v(json!("10.5"))), 10.5);
        assert_eq!(num(&v(json!(" 7 "))), 7.0);
        assert_eq!(num(&v(json!("abc"))), 0.0);
        assert_eq!(num(&v(json!(""))), 0.0);
        assert_eq!(num(&v(json!(true))), 1.0);
        assert_eq!(num(&v(json!(false))), 0.0);
        assert_eq!(num(&v(json!(null))), 0.0);
        assert_eq!(num(&v(json!([5]))), 5.0);
        assert_eq!(num(&v(json!([1, 2]))), 0.0);
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(&v(json!(1))));
        assert!(is_numeric(&v(json!("1.5e3"))));
        assert!(!is_numeric(&v(json!("abc"))));
        assert!(!is_numeric(&v(json!(""))));
        assert!(!is_numeric(&v(json!(true))));
        assert!(!is_numeric(&v(json!(null))));
        assert!(!is_numeric(&v(json!("NaN"))));
    }

    #[test]
    fn test_num_to_string() {
        assert_eq!(num_to_string(10.0), "10");
        assert_eq!(num_to_string(-0.0), "0");
        assert_eq!(num_to_string(0.25), "0.25");
        assert_eq!(num_to_string(1e20), "100000000000000000000");
        assert_eq!(num_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_num_to_string_exponent_form() {
        assert_eq!(num_to_string(1e21), "1e+21");
        assert_eq!(num_to_string(-2.5e30), "-2.5e+30");
        assert_eq!(num_to_string(1e-7), "1e-7");
        assert_eq!(num_to_string(1.5e-7), "1.5e-7");
        assert_eq!(num_to_string(0.000001), "0.000001");
        assert_eq!(num_to_string(999999999999999900000.0), "999999999999999900000");
    }

    #[test]
    fn test_str_val() {
        assert_eq!(str_val(&v(json!(null))), "null");
        assert_eq!(str_val(&v(json!(true))), "true");
        assert_eq!(str_val(&v(json!([1, null, "a"]))), "1,,a");
        assert_eq!(str_val(&v(json!({"a": 1}))), "[object Object]");
    }

    #[test]
    fn test_soft_equal() {
        assert!(soft_equal(&v(json!(10)), &v(json!("10"))));
        assert!(soft_equal(&v(json!(true)), &v(json!(1))));
        assert!(soft_equal(&v(json!(false)), &v(json!("0"))));
        assert!(soft_equal(&v(json!(null)), &v(json!(null))));
        assert!(!soft_equal(&v(json!(null)), &v(json!("null"))));
        assert!(!soft_equal(&v(json!(1)), &v(json!(2))));
    }

    #[test]
    fn test_hard_equal() {
        assert!(hard_equal(&v(json!(1)), &v(json!(1.0))));
        assert!(!hard_equal(&v(json!(10)), &v(json!("10"))));
        assert!(!hard_equal(&v(json!(null)), &v(json!(false))));
        assert!(hard_equal(&v(json!([1, "a"])), &v(json!([1, "a"]))));
    }

    #[test]
    fn test_between() {
        let (one, two, three) = (v(json!(1)), v(json!(2)), v(json!(3)));
        assert!(between_exclusive(&one, &two, &three));
        assert!(!between_exclusive(&one, &one, &three));
        assert!(between_inclusive(&one, &one, &three));
        assert!(!between_inclusive(&one, &v(json!("x")), &three));
    }
}
