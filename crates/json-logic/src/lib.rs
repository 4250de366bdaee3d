//! JsonLogic rule evaluator.
//!
//! # Overview
//!
//! A rule is a JSON document describing an operator tree: every operator node
//! is an object with a single key, the operator name, mapped to its operands.
//! Rules are applied to a JSON data document and produce a single [`Value`].
//!
//! ```text
//! {"if": [{"<": [{"var": "temp"}, 0]}, "freezing", "fine"]}
//! ```
//!
//! # Example
//!
//! ```
//! use json_logic::{apply, JsonLogic, Value};
//! use serde_json::json;
//!
//! let rule = json!({"<": [1, {"var": "x"}, 3]});
//! assert_eq!(apply(&rule, &json!({"x": 2})).unwrap(), Value::Bool(true));
//!
//! let mut engine = JsonLogic::new();
//! engine.add_operator("double", |args, _data| {
//!     Ok(Value::Number(json_logic::util::num(&args[0]) * 2.0))
//! });
//! assert_eq!(engine.run(&json!({"double": 21})).unwrap(), Value::Number(42.0));
//! ```

pub mod compile;
pub mod engine;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod operators;
pub mod types;
pub mod util;
pub mod value;
pub mod vars;

use serde_json::Value as Json;
use std::sync::OnceLock;

// Re-export the core public API
pub use compile::CompiledRule;
pub use engine::JsonLogic;
pub use error::LogicError;
pub use eval_ctx::{EvalCtx, EvalOptions, LogSink, DEFAULT_MAX_DEPTH};
pub use evaluate::evaluate;
pub use operators::operators_map;
pub use types::{Arity, Operation, OperatorDefinition, Operators};
pub use value::{Value, ValueKind};

fn builtin_engine() -> &'static JsonLogic {
    static ENGINE: OnceLock<JsonLogic> = OnceLock::new();
    ENGINE.get_or_init(JsonLogic::new)
}

/// Applies `rule` to `data` using the built-in operators.
pub fn apply(rule: &Json, data: &Json) -> Result<Value, LogicError> {
    builtin_engine().apply(rule, data)
}

/// Applies `rule` to the empty object using the built-in operators.
pub fn run(rule: &Json) -> Result<Value, LogicError> {
    builtin_engine().run(rule)
}

/// Parses JSON text and applies `rule` to `data` using the built-in operators.
pub fn apply_str(rule: &str, data: &str) -> Result<Value, LogicError> {
    builtin_engine().apply_str(rule, data)
}
