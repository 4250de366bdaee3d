use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogicError {
    #[error("Malformed rule: {0}")]
    MalformedRule(String),

    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("\"{operator}\" operator expects at least {expected} operands, got {got}.")]
    ArityError {
        operator: String,
        expected: usize,
        got: usize,
    },

    #[error("Rule nesting exceeds the maximum depth of {0}.")]
    TooDeep(usize),

    #[error("{0}")]
    Custom(String),
}
