//! Data access operators: `var`, `missing`, `missing_some`.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operation, OperatorDefinition};
use crate::util;
use crate::value::{Value, NULL};
use crate::vars;
use std::sync::Arc;

fn var_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let path = args.first().unwrap_or(&NULL);
    Ok(vars::resolve_var(path, args.get(1), ctx.data))
}

/// `missing` takes its keys either as operands or as one array operand, so
/// `{"missing": {"merge": [...]}}` works.
fn key_list(args: &[Value]) -> &[Value] {
    match args {
        [Value::Array(keys)] => keys,
        _ => args,
    }
}

fn missing_keys(keys: &[Value], data: &Value) -> Vec<Value> {
    keys.iter()
        .filter(|key| vars::is_missing(key, data))
        .cloned()
        .collect()
}

fn missing_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Array(missing_keys(key_list(args), ctx.data)))
}

fn missing_some_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let min_required = util::num(&args[0]);
    let keys = key_list(&args[1..]);
    let missing = missing_keys(keys, ctx.data);
    let present = keys.len() - missing.len();
    if present as f64 >= min_required {
        Ok(Value::Array(Vec::new()))
    } else {
        Ok(Value::Array(missing))
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "var".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Eager(var_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "missing".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Eager(missing_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "missing_some".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(missing_some_eval),
        }),
    ]
}
