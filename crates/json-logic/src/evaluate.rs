//! The rule dispatcher and argument resolver.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::types::{assert_arity, Operation, OperatorDefinition};
use crate::value::Value;
use serde_json::Value as Json;

/// Evaluates a rule against the context's data document.
///
/// - An object with exactly one key `{op: operand}` dispatches to operator `op`.
/// - An array evaluates each element as a rule and yields an array.
/// - Any other JSON value is a literal and evaluates to itself.
pub fn evaluate(rule: &Json, ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    match rule {
        Json::Object(map) => {
            let mut entries = map.iter();
            match (entries.next(), entries.next()) {
                (Some((name, operand)), None) => dispatch(name, operand, ctx),
                _ => Err(LogicError::MalformedRule(format!(
                    "operator object must have exactly one key, found {}",
                    map.len()
                ))),
            }
        }
        Json::Array(items) => {
            descend(ctx, "array")?;
            let result = items
                .iter()
                .map(|item| evaluate(item, ctx))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array);
            ctx.leave();
            result
        }
        literal => Ok(Value::from(literal)),
    }
}

fn dispatch(name: &str, operand: &Json, ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let def = ctx
        .operators
        .get(name)
        .cloned()
        .ok_or_else(|| LogicError::UnknownOperator(name.to_string()))?;

    descend(ctx, name)?;
    tracing::trace!(operator = name, depth = ctx.depth(), "dispatch");

    let result = invoke(&def, operand, ctx);
    ctx.leave();
    result
}

/// Enters one nesting level for `node`, an operator name or `"array"`.
/// The caller must `leave` once the node is done.
fn descend(ctx: &mut EvalCtx<'_>, node: &str) -> Result<(), LogicError> {
    if ctx.enter() {
        return Ok(());
    }
    ctx.leave();
    let max_depth = ctx.options.max_depth;
    tracing::debug!(node, max_depth, "rule nesting limit exceeded");
    Err(LogicError::TooDeep(max_depth))
}

fn invoke(
    def: &OperatorDefinition,
    operand: &Json,
    ctx: &mut EvalCtx<'_>,
) -> Result<Value, LogicError> {
    match &def.operation {
        Operation::Lazy(eval_fn) => {
            let nodes = operand_nodes(operand);
            assert_arity(&def.name, def.arity, nodes.len())?;
            eval_fn(nodes, ctx)
        }
        Operation::Eager(eval_fn) => {
            let args = resolve_args(operand, ctx)?;
            assert_arity(&def.name, def.arity, args.len())?;
            eval_fn(&args, ctx)
        }
        Operation::Custom(eval_fn) => {
            let args = resolve_args(operand, ctx)?;
            eval_fn(&args, ctx.data)
        }
    }
}

/// Returns the operand rules of an operator.
///
/// An array is the operand list itself; any other node is a single operand,
/// so `{"-": 2}` and `{"-": [2]}` are the same rule.
pub fn operand_nodes(operand: &Json) -> &[Json] {
    match operand {
        Json::Array(items) => items,
        other => std::slice::from_ref(other),
    }
}

/// Resolves an operator's operands left to right, evaluating nested rules.
pub fn resolve_args(operand: &Json, ctx: &mut EvalCtx<'_>) -> Result<Vec<Value>, LogicError> {
    operand_nodes(operand)
        .iter()
        .map(|node| evaluate(node, ctx))
        .collect()
}
