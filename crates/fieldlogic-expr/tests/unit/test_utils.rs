//! Shared fixtures for evaluator tests

use fieldlogic_domain::FieldValue;
use fieldlogic_expr::{ExpressionEngine, FieldState};
use std::collections::HashMap;

/// Sibling fields used across the evaluator tests
pub fn sample_fields() -> HashMap<String, FieldValue> {
    HashMap::from([
        ("country".to_string(), FieldValue::from("US")),
        ("age".to_string(), FieldValue::from(30)),
        ("tags".to_string(), FieldValue::from(vec!["a", "b"])),
        ("nothing".to_string(), FieldValue::Null),
    ])
}

/// Evaluate against `value` with default state and the sample fields
pub fn eval(expression: &str, value: impl Into<FieldValue>) -> bool {
    ExpressionEngine::new().evaluate(
        expression,
        &value.into(),
        &FieldState::default(),
        &sample_fields(),
    )
}

/// Like [`eval`] but surfacing evaluation errors
pub fn try_eval(expression: &str, value: impl Into<FieldValue>) -> fieldlogic_domain::Result<bool> {
    ExpressionEngine::new().try_evaluate(
        expression,
        &value.into(),
        &FieldState::default(),
        &sample_fields(),
    )
}
