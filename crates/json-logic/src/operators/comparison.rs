//! Comparison operators.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operation, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

fn eq_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(util::soft_equal(&args[0], &args[1])))
}

fn ne_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(!util::soft_equal(&args[0], &args[1])))
}

fn strict_eq_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(util::hard_equal(&args[0], &args[1])))
}

fn strict_ne_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(!util::hard_equal(&args[0], &args[1])))
}

/// Two operands: `a < b`. Three operands: exclusive between, `a < b < c`.
fn lt_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(match args {
        [a, b, c, ..] => util::between_exclusive(a, b, c),
        [a, b] => util::less(a, b),
        _ => false,
    }))
}

/// Two operands: `a <= b`. Three operands: inclusive between, `a <= b <= c`.
fn le_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(match args {
        [a, b, c, ..] => util::between_inclusive(a, b, c),
        [a, b] => util::less_eq(a, b),
        _ => false,
    }))
}

fn gt_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(util::less(&args[1], &args[0])))
}

fn ge_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(util::less_eq(&args[1], &args[0])))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "==".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(eq_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "!=".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(ne_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "===".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(strict_eq_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "!==".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(strict_ne_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "<".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(lt_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "<=".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(le_eval),
        }),
        Arc::new(OperatorDefinition {
            name: ">".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(gt_eval),
        }),
        Arc::new(OperatorDefinition {
            name: ">=".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Eager(ge_eval),
        }),
    ]
}
