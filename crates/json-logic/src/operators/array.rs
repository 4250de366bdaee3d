//! Array operators.
//!
//! `all`, `some`, `none`, `map`, `filter` and `reduce` take a sub-rule that is
//! evaluated once per element, with the element as the data document.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::types::{Arity, Operation, OperatorDefinition};
use crate::util;
use crate::value::Value;
use serde_json::Value as Json;
use std::collections::BTreeMap;
use std::sync::Arc;

fn merge_eval(args: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let mut result = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Array(items) => result.extend(items.iter().cloned()),
            other => result.push(other.clone()),
        }
    }
    Ok(Value::Array(result))
}

/// Evaluates the collection operand; anything but an array is empty.
fn items(node: &Json, ctx: &mut EvalCtx<'_>) -> Result<Vec<Value>, LogicError> {
    match evaluate(node, ctx)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

fn test_item(rule: &Json, item: &Value, ctx: &EvalCtx<'_>) -> Result<bool, LogicError> {
    let mut scoped = ctx.scoped(item);
    Ok(util::is_truthy(&evaluate(rule, &mut scoped)?))
}

fn any_item(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<bool, LogicError> {
    for item in items(&nodes[0], ctx)? {
        if test_item(&nodes[1], &item, ctx)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// False for an empty collection.
fn all_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let items = items(&nodes[0], ctx)?;
    if items.is_empty() {
        return Ok(Value::Bool(false));
    }
    for item in &items {
        if !test_item(&nodes[1], item, ctx)? {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn some_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(any_item(nodes, ctx)?))
}

fn none_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    Ok(Value::Bool(!any_item(nodes, ctx)?))
}

fn map_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let items = items(&nodes[0], ctx)?;
    let mut result = Vec::with_capacity(items.len());
    for item in &items {
        result.push(evaluate(&nodes[1], &mut ctx.scoped(item))?);
    }
    Ok(Value::Array(result))
}

fn filter_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let mut result = Vec::new();
    for item in items(&nodes[0], ctx)? {
        if test_item(&nodes[1], &item, ctx)? {
            result.push(item);
        }
    }
    Ok(Value::Array(result))
}

/// The sub-rule sees `{"current": element, "accumulator": acc}` as its data.
fn reduce_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let items = items(&nodes[0], ctx)?;
    let mut acc = match nodes.get(2) {
        Some(initial) => evaluate(initial, ctx)?,
        None => Value::Null,
    };
    for item in items {
        let mut scope = BTreeMap::new();
        scope.insert("current".to_string(), item);
        scope.insert("accumulator".to_string(), acc);
        let scope = Value::Object(scope);
        acc = evaluate(&nodes[1], &mut ctx.scoped(&scope))?;
    }
    Ok(acc)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "merge".to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Eager(merge_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "all".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Lazy(all_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "some".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Lazy(some_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "none".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Lazy(none_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "map".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Lazy(map_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "filter".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Lazy(filter_eval),
        }),
        Arc::new(OperatorDefinition {
            name: "reduce".to_string(),
            aliases: &[],
            arity: Arity::AtLeast(2),
            operation: Operation::Lazy(reduce_eval),
        }),
    ]
}
