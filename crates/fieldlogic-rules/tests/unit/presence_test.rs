//! Tests for `required`, `required_with` and `required_without`

use crate::test_utils::passes;
use fieldlogic_domain::{FieldSubject, FieldValue, SubjectKind};
use fieldlogic_rules::validate;

#[test]
fn test_required_text() {
    assert!(passes("x", "required"));
    assert!(!passes("   ", "required"));
    assert!(!passes(FieldValue::Null, "required"));
    assert!(passes(0, "required"));
    assert!(passes(vec!["a"], "required"));
    assert!(!passes(FieldValue::List(vec![]), "required"));
}

#[test]
fn test_required_checkbox_uses_checked_flag() {
    let unchecked = FieldSubject::new(SubjectKind::Checkbox);
    let checked = FieldSubject::new(SubjectKind::Checkbox).with_checked(true);
    let value = FieldValue::from("on");
    assert!(!validate(&value, "required", &unchecked).is_valid());
    assert!(validate(&value, "required", &checked).is_valid());
    assert!(validate(&FieldValue::from(""), "required", &checked).is_valid());
}

#[test]
fn test_required_radio_uses_truthiness() {
    let radio = FieldSubject::new(SubjectKind::Radio);
    assert!(validate(&FieldValue::from("b"), "required", &radio).is_valid());
    assert!(!validate(&FieldValue::from(""), "required", &radio).is_valid());
    assert!(!validate(&FieldValue::from(0), "required", &radio).is_valid());
}

#[test]
fn test_required_with_sibling_present() {
    let subject = FieldSubject::new(SubjectKind::Text).with_field("a", "x");
    let outcome = validate(&FieldValue::from(""), "required_with:a", &subject);
    assert_eq!(outcome.failed(), Some("required_with"));
    assert_eq!(outcome.param(), Some("a"));
    assert!(validate(&FieldValue::from("y"), "required_with:a", &subject).is_valid());
}

#[test]
fn test_required_with_siblings_blank() {
    let subject = FieldSubject::new(SubjectKind::Text)
        .with_field("a", "  ")
        .with_field("b", false);
    assert!(validate(&FieldValue::from(""), "required_with:a b", &subject).is_valid());
    assert!(validate(&FieldValue::from(""), "required_with:a|missing", &subject).is_valid());
}

#[test]
fn test_required_without() {
    let subject = FieldSubject::new(SubjectKind::Text)
        .with_field("phone", "")
        .with_field("email", "x@example.com");
    assert_eq!(
        validate(&FieldValue::Null, "required_without:phone", &subject).failed(),
        Some("required_without")
    );
    assert!(validate(&FieldValue::Null, "required_without:email", &subject).is_valid());
    assert!(validate(&FieldValue::from("555"), "required_without:phone", &subject).is_valid());
}
