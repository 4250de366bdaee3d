//! Compiled rules.
//!
//! Compiling checks the whole rule tree once (operator objects are
//! single-keyed, operator names are registered, nesting is within bounds) and
//! binds it to a registry snapshot, so the rule can then be applied to many
//! data documents without re-checking and without seeing later registry
//! changes.

use crate::error::LogicError;
use crate::eval_ctx::{EvalCtx, EvalOptions};
use crate::evaluate::{evaluate, operand_nodes};
use crate::types::Operators;
use crate::value::Value;
use serde_json::Value as Json;
use std::sync::Arc;

/// A validated rule bound to the registry it was compiled against.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: Json,
    operators: Arc<Operators>,
    options: EvalOptions,
}

impl CompiledRule {
    pub(crate) fn new(rule: Json, operators: Arc<Operators>, options: EvalOptions) -> Self {
        CompiledRule {
            rule,
            operators,
            options,
        }
    }

    pub fn rule(&self) -> &Json {
        &self.rule
    }

    /// Applies the rule to `data`. `null` data is treated as the empty object.
    pub fn apply(&self, data: &Json) -> Result<Value, LogicError> {
        let data = match data {
            Json::Null => Value::Object(Default::default()),
            other => Value::from(other),
        };
        self.apply_value(&data)
    }

    pub fn apply_value(&self, data: &Value) -> Result<Value, LogicError> {
        let mut ctx = EvalCtx::new(data, Arc::clone(&self.operators), &self.options);
        evaluate(&self.rule, &mut ctx)
    }
}

/// Checks a rule tree without evaluating it.
pub fn validate(rule: &Json, operators: &Operators, max_depth: usize) -> Result<(), LogicError> {
    validate_node(rule, operators, max_depth, 0)
}

fn validate_node(
    rule: &Json,
    operators: &Operators,
    max_depth: usize,
    depth: usize,
) -> Result<(), LogicError> {
    match rule {
        Json::Object(map) => {
            if map.len() != 1 {
                return Err(LogicError::MalformedRule(format!(
                    "operator object must have exactly one key, found {}",
                    map.len()
                )));
            }
            if depth >= max_depth {
                return Err(LogicError::TooDeep(max_depth));
            }
            for (name, operand) in map {
                if !operators.contains(name) {
                    return Err(LogicError::UnknownOperator(name.clone()));
                }
                for node in operand_nodes(operand) {
                    validate_node(node, operators, max_depth, depth + 1)?;
                }
            }
            Ok(())
        }
        Json::Array(items) => {
            if depth >= max_depth {
                return Err(LogicError::TooDeep(max_depth));
            }
            items
                .iter()
                .try_for_each(|item| validate_node(item, operators, max_depth, depth + 1))
        }
        _ => Ok(()),
    }
}
