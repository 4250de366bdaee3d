//! Built-in operator definitions.

pub mod arithmetic;
pub mod array;
pub mod branching;
pub mod comparison;
pub mod input;
pub mod logical;
pub mod misc;
pub mod string;

use crate::types::{operators_to_map, OperatorDefinition, Operators};
use std::sync::Arc;

/// All built-in operators combined.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(input::operators());
    ops.extend(branching::operators());
    ops.extend(logical::operators());
    ops.extend(comparison::operators());
    ops.extend(arithmetic::operators());
    ops.extend(string::operators());
    ops.extend(array::operators());
    ops.extend(misc::operators());
    ops
}

/// Build the operator registry holding every built-in operator.
pub fn operators_map() -> Operators {
    operators_to_map(all_operators())
}
