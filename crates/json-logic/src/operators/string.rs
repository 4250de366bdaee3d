//! String operators: `cat`, `in`, `substr`.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operation, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

fn cat_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::String(args.iter().map(util::str_val).collect()))
}

/// Array membership (strict equality) when the haystack is an array,
/// substring search otherwise.
fn in_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let needle = &args[0];
    let found = match &args[1] {
        Value::Array(items) => items.iter().any(|item| util::hard_equal(item, needle)),
        haystack => util::str_val(haystack).contains(util::str_val(needle).as_str()),
    };
    Ok(Value::Bool(found))
}

/// Character-based slicing.
///
/// A negative start counts from the end. A positive length takes that many
/// characters, a negative one stops that many characters before the end, and
/// an omitted one runs to the end.
pub fn substr(source: &str, start: i64, length: Option<i64>) -> String {
    let chars: Vec<char> = source.chars().collect();
    let len = chars.len() as i64;
    let start = if start < 0 {
        len.saturating_add(start).max(0)
    } else {
        start.min(len)
    };
    let end = match length {
        None => len,
        Some(length) if length < 0 => len.saturating_add(length),
        Some(length) => start.saturating_add(length).min(len),
    }
    .max(start);
    chars[start as usize..end as usize].iter().collect()
}

fn substr_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let source = util::str_val(&args[0]);
    let length = args.get(2).map(util::int);
    Ok(Value::String(substr(&source, util::int(&args[1]), length)))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "cat".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Eager(cat_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "in".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(in_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "substr".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(substr_eval),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substr() {
        assert_eq!(substr("jsonlogic", 4, None), "logic");
        assert_eq!(substr("jsonlogic", -5, None), "logic");
        assert_eq!(substr("jsonlogic", 1, Some(3)), "son");
        assert_eq!(substr("jsonlogic", 4, Some(-2)), "log");
        assert_eq!(substr("jsonlogic", 4, Some(0)), "");
    }

    #[test]
    fn test_substr_out_of_range() {
        assert_eq!(substr("abc", 10, None), "");
        assert_eq!(substr("abc", -10, None), "abc");
        assert_eq!(substr("abc", 1, Some(100)), "bc");
        assert_eq!(substr("abc", 2, Some(-5)), "");
        assert_eq!(substr("abc", i64::MIN, Some(i64::MAX)), "abc");
    }

    #[test]
    fn test_substr_counts_characters() {
        assert_eq!(substr("héllo wörld", -5, None), "wörld");
        assert_eq!(substr("日本語テキスト", 3, Some(2)), "テキ");
    }
}
