//! Property tests over generated rule trees.

use json_logic::{JsonLogic, LogicError, Value};
use proptest::prelude::*;
use serde_json::{json, Map, Value as Json};

const OPERATORS: &[&str] = &[
    "var", "missing", "missing_some", "if", "?:", "==", "!=", "===", "!==", "!", "!!", "and",
    "or", ">", ">=", "<", "<=", "+", "-", "*", "/", "%", "max", "min", "cat", "in", "substr",
    "merge", "all", "some", "none", "map", "filter", "reduce", "no_such_op",
];

fn leaf() -> impl Strategy<Value = Json> {
    prop_oneof![
        Just(Json::Null),
        any::<bool>().prop_map(Json::Bool),
        (-1000i64..1000).prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-c0-9.]{0,5}".prop_map(Json::String),
    ]
}

fn rule() -> impl Strategy<Value = Json> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Json::Array),
            (
                prop::sample::select(OPERATORS),
                prop::collection::vec(inner, 0..4)
            )
                .prop_map(|(op, operands)| {
                    let mut map = Map::new();
                    map.insert(op.to_string(), Json::Array(operands));
                    Json::Object(map)
                }),
        ]
    })
}

fn data() -> impl Strategy<Value = Json> {
    prop::collection::vec(("[abc]{1,2}", leaf()), 0..4)
        .prop_map(|entries| Json::Object(entries.into_iter().collect()))
}

fn encode(result: Result<Value, LogicError>) -> Result<Json, LogicError> {
    result.map(|value| value.to_json())
}

proptest! {
    #[test]
    fn evaluation_returns_value_or_known_error(rule in rule(), data in data()) {
        match JsonLogic::new().apply(&rule, &data) {
            Ok(_) => {}
            Err(LogicError::MalformedRule(_))
            | Err(LogicError::UnknownOperator(_))
            | Err(LogicError::ArityError { .. })
            | Err(LogicError::TooDeep(_)) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?} for {}", other, rule),
        }
    }

    #[test]
    fn evaluation_is_idempotent(rule in rule(), data in data()) {
        let engine = JsonLogic::new();
        let first = encode(engine.apply(&rule, &data));
        let second = encode(engine.apply(&rule, &data));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn compiled_rules_agree_with_apply(rule in rule(), data in data()) {
        let engine = JsonLogic::new();
        if let Ok(compiled) = engine.compile(rule.clone()) {
            prop_assert_eq!(
                encode(compiled.apply(&data)),
                encode(engine.apply(&rule, &data))
            );
        }
    }

    #[test]
    fn literals_equal_themselves(literal in leaf()) {
        let engine = JsonLogic::new();
        prop_assert_eq!(
            engine.run(&json!({"==": [literal.clone(), literal.clone()]})),
            Ok(Value::Bool(true))
        );
        prop_assert_eq!(
            engine.run(&json!({"===": [literal.clone(), literal]})),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn not_negates_double_not(literal in leaf()) {
        let engine = JsonLogic::new();
        let not = engine.run(&json!({"!": [literal.clone()]})).unwrap();
        let truthy = engine.run(&json!({"!!": [literal]})).unwrap();
        prop_assert_eq!(not, Value::Bool(truthy == Value::Bool(false)));
    }
}
