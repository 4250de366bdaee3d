//! Branching operators: `if` and its alias `?:`.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::types::{Arity, Operation, OperatorDefinition};
use crate::util;
use crate::value::Value;
use serde_json::Value as Json;
use std::sync::Arc;

/// Walks `(condition, value)` pairs and evaluates only the selected branch.
///
/// A trailing unpaired operand is the else branch; with no else branch and no
/// truthy condition the result is `null`.
fn if_eval(nodes: &[Json], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    let mut pairs = nodes.chunks_exact(2);
    for pair in &mut pairs {
        let condition = evaluate(&pair[0], ctx)?;
        if util::is_truthy(&condition) {
            return evaluate(&pair[1], ctx);
        }
    }
    match pairs.remainder() {
        [otherwise] => evaluate(otherwise, ctx),
        _ => Ok(Value::Null),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "if".to_string(),
        aliases: &["?:"],
        arity: Arity::AtLeast(1),
        operation: Operation::Lazy(if_eval),
    })]
}
