use crate::error::LogicError;
use crate::eval_ctx::EvalCtx;
use crate::value::Value;
use serde_json::Value as Json;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Operator arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Skip the arity check.
    Any,
    /// At least `n` operands.
    AtLeast(usize),
}

/// Built-in operator receiving its operands already resolved, left to right.
pub type EvalFn = for<'a> fn(&[Value], &mut EvalCtx<'a>) -> Result<Value, LogicError>;

/// Built-in operator receiving its raw operand rules.
///
/// Used where operands must not all be evaluated up front: short-circuiting
/// (`if`, `and`, `or`) and sub-rules run against each array element.
pub type LazyEvalFn = for<'a> fn(&[Json], &mut EvalCtx<'a>) -> Result<Value, LogicError>;

/// Caller-registered operator: resolved operands plus the current data document.
pub type CustomFn = dyn Fn(&[Value], &Value) -> Result<Value, LogicError> + Send + Sync;

#[derive(Clone)]
pub enum Operation {
    Eager(EvalFn),
    Lazy(LazyEvalFn),
    Custom(Arc<CustomFn>),
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Eager(_) => f.write_str("Eager"),
            Operation::Lazy(_) => f.write_str("Lazy"),
            Operation::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// An operator definition.
#[derive(Debug, Clone)]
pub struct OperatorDefinition {
    pub name: String,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub operation: Operation,
}

impl OperatorDefinition {
    /// Wraps a caller-supplied closure as an operator without aliases or arity check.
    pub fn custom<F>(name: &str, eval_fn: F) -> Arc<Self>
    where
        F: Fn(&[Value], &Value) -> Result<Value, LogicError> + Send + Sync + 'static,
    {
        Arc::new(OperatorDefinition {
            name: name.to_string(),
            aliases: &[],
            arity: Arity::Any,
            operation: Operation::Custom(Arc::new(eval_fn)),
        })
    }
}

/// Map of operator name -> definition.
///
/// Cloning is cheap relative to evaluation: definitions are shared behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Operators {
    map: HashMap<String, Arc<OperatorDefinition>>,
}

impl Operators {
    pub fn new() -> Self {
        Operators::default()
    }

    /// Registers an operator under its name and aliases.
    ///
    /// Returns the definition previously registered under the name, if any.
    pub fn register(&mut self, def: Arc<OperatorDefinition>) -> Option<Arc<OperatorDefinition>> {
        for alias in def.aliases {
            self.map.insert(alias.to_string(), Arc::clone(&def));
        }
        self.map.insert(def.name.clone(), def)
    }

    pub fn unregister(&mut self, name: &str) -> Option<Arc<OperatorDefinition>> {
        self.map.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<OperatorDefinition>> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

/// Builds an `Operators` registry from a list of operator definitions.
pub fn operators_to_map(operators: Vec<Arc<OperatorDefinition>>) -> Operators {
    let mut map = Operators::new();
    for op in operators {
        map.register(op);
    }
    map
}

/// Asserts that an operator received enough operands.
pub fn assert_arity(operator: &str, arity: Arity, got: usize) -> Result<(), LogicError> {
    match arity {
        Arity::Any => Ok(()),
        Arity::AtLeast(expected) => {
            if got < expected {
                Err(LogicError::ArityError {
                    operator: operator.to_string(),
                    expected,
                    got,
                })
            } else {
                Ok(())
            }
        }
    }
}
