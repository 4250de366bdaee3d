//! Arithmetic operators. Operands are coerced with `util::num`.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operation, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

fn add_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Number(args.iter().map(util::num).sum()))
}

/// One operand negates it; more subtract the rest from the first.
fn subtract_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let first = util::num(&args[0]);
    if args.len() == 1 {
        return Ok(Value::Number(-first));
    }
    Ok(Value::Number(
        args[1..].iter().fold(first, |acc, v| acc - util::num(v)),
    ))
}

fn multiply_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Number(args.iter().map(util::num).product()))
}

/// Division by zero yields an infinite (or NaN) number, encoded as `null`.
fn divide_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Number(util::num(&args[0]) / util::num(&args[1])))
}

/// What percent `a` is of `b`, on the operands truncated to integers.
fn percent_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let part = util::int(&args[0]) as f64;
    let whole = util::int(&args[1]) as f64;
    Ok(Value::Number(part * 100.0 / whole))
}

fn max_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Number(
        args.iter().map(util::num).reduce(f64::max).unwrap_or(0.0),
    ))
}

fn min_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Number(
        args.iter().map(util::num).reduce(f64::min).unwrap_or(0.0),
    ))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "+".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Eager(add_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "-".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(1),
            operation: Operation::Eager(subtract_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "*".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(1),
            operation: Operation::Eager(multiply_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "/".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(divide_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "%".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(percent_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "max".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Eager(max_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "min".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Eager(min_eval),
        }),
    ]
}
