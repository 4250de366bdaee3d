//! Miscellaneous operators.

use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, Operation, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

/// Writes its operand to the log sink and passes it through unchanged.
fn log_eval(args: &[Value], ctx: &mut EvalCtx<'_>) -> Result<Value, LogicError> {
    ctx.log(&util::str_val(&args[0]));
    Ok(args[0].clone())
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "log".to_string(),
        aliases: &[],
        arity: Arity::AtLeast(1),
        operation: Operation::Eager(log_eval),
    })]
}
