//! Logical operators: `and`, `or`, `!`, `!!`.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::types::{Arity, Operation, OperatorDefinition};
use crate::util;
use crate::value::Value;
use serde_json::Value as Json;
use std::sync::Arc;

// `and` / `or` stop at the first operand that decides the result.

fn and_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    for node in nodes {
        if !util::is_truthy(&evaluate(node, ctx)?) {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn or_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    for node in nodes {
        if util::is_truthy(&evaluate(node, ctx)?) {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

fn not_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(!util::is_truthy(&args[0])))
}

fn truthy_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(util::is_truthy(&args[0])))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "and".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Lazy(and_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "or".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Lazy(or_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "!".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(1),
            operation: Operation::Eager(not_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "!!".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(1),
            operation: Operation::Eager(truthy_eval),
        }),
    ]
}
