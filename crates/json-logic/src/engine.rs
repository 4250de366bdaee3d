use crate::compile::{validate, CompiledRule};
use crate::error::LogicError;
use crate::eval_ctx::{EvalCtx, EvalOptions, LogSink};
use crate::evaluate::evaluate;
use crate::operators::operators_map;
use crate::types::{OperatorDefinition, Operators};
use crate::value::Value;
use serde_json::Value as Json;
use std::sync::Arc;

/// A rule engine: an operator registry plus evaluation options.
///
/// The registry is copy-on-write. Adding or removing an operator never
/// affects a [`snapshot`](JsonLogic::snapshot) or [`CompiledRule`] taken
/// earlier, so an engine can be cloned across threads and each clone
/// customised independently.
#[derive(Debug, Clone)]
pub struct JsonLogic {
    operators: Arc<Operators>,
    options: EvalOptions,
}

impl Default for JsonLogic {
    fn default() -> Self {
        JsonLogic::new()
    }
}

impl JsonLogic {
    /// An engine with every built-in operator and default options.
    pub fn new() -> Self {
        JsonLogic {
            operators: Arc::new(operators_map()),
            options: EvalOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    pub fn with_log_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let sink: Arc<LogSink> = Arc::new(sink);
        self.options.log_sink = Some(sink);
        self
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Registers a custom operator, replacing any operator of the same name.
    ///
    /// Returns the replaced definition.
    pub fn add_operator<F>(&mut self, name: &str, eval_fn: F) -> Option<Arc<OperatorDefinition>>
    where
        F: Fn(&[Value], &Value) -> Result<Value, LogicError> + Send + Sync + 'static,
    {
        Arc::make_mut(&mut self.operators).register(OperatorDefinition::custom(name, eval_fn))
    }

    /// Removes the operator registered under `name`. Built-ins can be removed too.
    pub fn remove_operator(&mut self, name: &str) -> Option<Arc<OperatorDefinition>> {
        if !self.operators.contains(name) {
            return None;
        }
        Arc::make_mut(&mut self.operators).unregister(name)
    }

    pub fn has_operator(&self, name: &str) -> bool {
        self.operators.contains(name)
    }

    /// The current registry. Later registrations do not show up in it.
    pub fn snapshot(&self) -> Arc<Operators> {
        Arc::clone(&self.operators)
    }

    /// Applies `rule` to `data`. `null` data is treated as the empty object.
    pub fn apply(&self, rule: &Json, data: &Json) -> Result<Value, LogicError> {
        let data = match data {
            Json::Null => Value::Object(Default::default()),
            other => Value::from(other),
        };
        self.apply_value(rule, &data)
    }

    /// Applies `rule` to an already converted data document.
    pub fn apply_value(&self, rule: &Json, data: &Value) -> Result<Value, LogicError> {
        let mut ctx = EvalCtx::new(data, Arc::clone(&self.operators), &self.options);
        evaluate(rule, &mut ctx)
    }

    /// Applies `rule` to the empty object.
    pub fn run(&self, rule: &Json) -> Result<Value, LogicError> {
        self.apply(rule, &Json::Null)
    }

    /// Parses `rule` and `data` from JSON text, then applies.
    ///
    /// Blank data text is the empty object.
    pub fn apply_str(&self, rule: &str, data: &str) -> Result<Value, LogicError> {
        let rule: Json =
            serde_json::from_str(rule).map_err(|e| LogicError::MalformedRule(e.to_string()))?;
        let data: Json = if data.trim().is_empty() {
            Json::Null
        } else {
            serde_json::from_str(data).map_err(|e| LogicError::MalformedData(e.to_string()))?
        };
        self.apply(&rule, &data)
    }

    /// Validates `rule` against the current registry and returns a reusable handle.
    pub fn compile(&self, rule: Json) -> Result<CompiledRule, LogicError> {
        validate(&rule, &self.operators, self.options.max_depth)?;
        Ok(CompiledRule::new(
            rule,
            Arc::clone(&self.operators),
            self.options.clone(),
        ))
    }
}
