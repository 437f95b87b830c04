//! Tests for chain evaluation order, skipping and registry extension

use crate::test_utils::{check, passes, text_subject};
use fieldlogic_domain::{Error, FieldValue};
use fieldlogic_rules::{RuleChain, RuleEngine, RuleOutcome, RuleRegistry};

#[test]
fn test_first_failure_is_reported() {
    let outcome = check("hi", "required,min:3,max:10");
    assert_eq!(outcome, RuleOutcome::invalid("min", Some("3".to_string())));
    assert_eq!(outcome.failed(), Some("min"));
    assert_eq!(outcome.param(), Some("3"));

    assert_eq!(check("hello", "required,min:3,max:10"), RuleOutcome::Valid);
}

#[test]
fn test_param_separators_and_whitespace() {
    assert!(passes("hello", " min=3 , max:5 "));
    assert!(!passes("hello", "max=4"));
    let chain = RuleChain::parse("required, oneof:a|b , ,len=2");
    let names: Vec<_> = chain.tokens().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["required", "oneof", "len"]);
    assert_eq!(chain.to_string(), "required,oneof:a|b,len:2");
}

#[test]
fn test_empty_values_skip_non_presence_rules() {
    assert!(passes("", "email,min:5,numeric"));
    assert!(passes(FieldValue::Null, "email"));
    assert!(passes(FieldValue::Undefined, "ipv4"));
    assert!(!passes("", "required,email"));
    assert_eq!(check("", "email,required").failed(), Some("required"));
}

#[test]
fn test_whitespace_is_not_empty_for_format_rules() {
    assert!(!passes(" ", "email"));
    assert!(!passes(" ", "required"));
}

#[test]
fn test_unknown_rules_are_skipped() {
    assert!(passes("abc", "no_such_rule,alpha"));
    assert!(!passes("abc1", "no_such_rule,alpha"));
    assert!(passes("", "bogus"));
}

#[test]
fn test_check_chain_reports_unknown_rules() {
    let engine = RuleEngine::standard();
    assert!(engine.check_chain("required,email,min:3").is_ok());
    assert_eq!(engine.unknown_rules("required,frobnicate,alpha,zap"), ["frobnicate", "zap"]);
    match engine.check_chain("required,frobnicate") {
        Err(Error::UnknownRule { name }) => assert_eq!(name, "frobnicate"),
        other => panic!("expected unknown rule error, got {other:?}"),
    }
}

#[test]
fn test_check_chain_rejects_nameless_tokens() {
    let engine = RuleEngine::standard();
    match engine.check_chain("required, :5") {
        Err(Error::InvalidRuleChain { message }) => assert!(message.contains(":5")),
        other => panic!("expected invalid rule chain error, got {other:?}"),
    }
    assert!(matches!(
        engine.check_chain("=x,frobnicate"),
        Err(Error::InvalidRuleChain { .. })
    ));
    // blank tokens between commas are ignored, not malformed
    assert!(engine.check_chain("required,,min:3,").is_ok());
}

#[test]
fn test_registry_extension() {
    let mut registry = RuleRegistry::standard();
    let standard_len = registry.len();
    registry.register("even", |value, _, _| value.to_number() % 2.0 == 0.0);
    assert_eq!(registry.len(), standard_len + 1);
    assert!(registry.contains("even"));

    let engine = RuleEngine::new(registry);
    let subject = text_subject();
    assert!(engine.validate(&FieldValue::from("4"), "even", &subject).is_valid());
    assert_eq!(
        engine.validate(&FieldValue::from("5"), "required,even", &subject).failed(),
        Some("even")
    );
    assert!(engine.validate(&FieldValue::from(""), "even", &subject).is_valid());
}

#[test]
fn test_presence_rules_replaceable() {
    let mut registry = RuleRegistry::new();
    registry.register_presence("present", |value, _, _| !value.is_blank());
    assert!(registry.get("present").is_some_and(|rule| rule.runs_on_empty()));

    let engine = RuleEngine::new(registry);
    let outcome = engine.validate(&FieldValue::from(""), "present", &text_subject());
    assert_eq!(outcome.failed(), Some("present"));
}

#[test]
fn test_standard_registry_names_sorted() {
    let registry = RuleRegistry::standard();
    let names = registry.names();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    for expected in ["required", "required_with", "email", "credit_card", "datetime", "ext"] {
        assert!(registry.contains(expected), "missing {expected}");
    }
}

#[test]
fn test_outcome_serialization() {
    let valid = serde_json::to_value(RuleOutcome::Valid).unwrap();
    assert_eq!(valid, serde_json::json!({"valid": true}));

    let invalid = RuleOutcome::invalid("min", Some("3".to_string()));
    let json = serde_json::to_value(&invalid).unwrap();
    assert_eq!(json, serde_json::json!({"valid": false, "failed": "min", "param": "3"}));
    assert_eq!(serde_json::from_value::<RuleOutcome>(json).unwrap(), invalid);
}
