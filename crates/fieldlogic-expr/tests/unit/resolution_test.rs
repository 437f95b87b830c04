//! Tests for operand resolution

use fieldlogic_domain::FieldValue;
use fieldlogic_expr::resolve::OperandResolver;
use fieldlogic_expr::{EvaluationContext, FieldState};
use serde_json::json;
use std::collections::HashMap;

fn resolve_with(value: FieldValue, operand: &str) -> FieldValue {
    let context = EvaluationContext::build(&value, &FieldState::default());
    let fields: HashMap<String, FieldValue> =
        HashMap::from([("city".to_string(), FieldValue::from("Oslo"))]);
    OperandResolver::new(&context, &fields)
        .resolve(operand)
        .expect("Should resolve")
}

fn resolve(operand: &str) -> FieldValue {
    resolve_with(FieldValue::from("current"), operand)
}

#[test]
fn test_literals() {
    assert_eq!(resolve("'single'"), FieldValue::from("single"));
    assert_eq!(resolve("\"double\""), FieldValue::from("double"));
    assert_eq!(resolve("42"), FieldValue::Number(42.0));
    assert_eq!(resolve("-1.5e2"), FieldValue::Number(-150.0));
    assert_eq!(resolve("true"), FieldValue::Bool(true));
    assert_eq!(resolve("false"), FieldValue::Bool(false));
    assert_eq!(resolve("null"), FieldValue::Null);
    assert_eq!(resolve("undefined"), FieldValue::Undefined);
}

#[test]
fn test_context_and_prefixes() {
    assert_eq!(resolve("value"), FieldValue::from("current"));
    assert_eq!(resolve("visible"), FieldValue::Bool(true));
    assert_eq!(resolve("fields.city"), FieldValue::from("Oslo"));
    assert_eq!(resolve("fields.unknown"), FieldValue::Undefined);
    assert_eq!(resolve("source.value"), FieldValue::from("current"));
    assert_eq!(resolve("source.unknown"), FieldValue::Undefined);
}

#[test]
fn test_unresolved_identifiers_are_literal_text() {
    assert_eq!(resolve("  draft "), FieldValue::from("draft"));
    assert_eq!(resolve("other.path"), FieldValue::from("other.path"));
    assert_eq!(resolve("Infinity"), FieldValue::from("Infinity"));
}

#[test]
fn test_dotted_paths_walk_structured_values() {
    let value: FieldValue = serde_json::from_value(json!({
        "address": { "zip": "0150" },
        "items": [10, 20]
    }))
    .expect("Should deserialize");

    assert_eq!(resolve_with(value.clone(), "value.address.zip"), FieldValue::from("0150"));
    assert_eq!(resolve_with(value.clone(), "value.items.1"), FieldValue::Number(20.0));
    assert_eq!(resolve_with(value.clone(), "value.items.length"), FieldValue::Number(2.0));
    assert_eq!(resolve_with(value.clone(), "value.items.9"), FieldValue::Undefined);
    assert_eq!(resolve_with(value, "value.nope.deeper"), FieldValue::Null);
    assert_eq!(resolve("value.length"), FieldValue::Number(7.0));
}

#[test]
fn test_prototype_segments_resolve_to_null() {
    for operand in [
        "value.__proto__",
        "value.constructor",
        "value.prototype",
        "value.constructor.prototype",
        "value.length.__proto__",
        "source.__proto__",
        "source.constructor",
        "fields.__proto__",
        "fields.city.constructor",
    ] {
        assert_eq!(resolve(operand), FieldValue::Null, "{operand}");
    }
}

#[test]
fn test_empty_operand_is_an_error() {
    let context = EvaluationContext::build(&FieldValue::Null, &FieldState::default());
    let fields: HashMap<String, FieldValue> = HashMap::new();
    assert!(OperandResolver::new(&context, &fields).resolve("  ").is_err());
}
