//! Tests for FieldValue coercions

use fieldlogic_domain::FieldValue;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_loose_equality_coerces_numbers_and_strings() {
    assert!(FieldValue::from(5).loose_eq(&FieldValue::from("5")));
    assert!(FieldValue::from("5.0").loose_eq(&FieldValue::from(5)));
    assert!(!FieldValue::from("5.0").loose_eq(&FieldValue::from("5")));
    assert!(FieldValue::from(true).loose_eq(&FieldValue::from("1")));
    assert!(FieldValue::from(false).loose_eq(&FieldValue::from(0)));
}

#[test]
fn test_loose_equality_null_and_undefined() {
    assert!(FieldValue::Null.loose_eq(&FieldValue::Undefined));
    assert!(!FieldValue::Null.strict_eq(&FieldValue::Undefined));
    assert!(!FieldValue::Null.loose_eq(&FieldValue::from(0)));
    assert!(!FieldValue::Undefined.loose_eq(&FieldValue::from("")));
}

#[test]
fn test_lists_compare_through_their_string_form() {
    let list = FieldValue::from(vec!["a", "b"]);
    assert!(list.loose_eq(&FieldValue::from("a,b")));
    assert!(!list.strict_eq(&FieldValue::from("a,b")));
    assert_eq!(FieldValue::from(vec![7]).to_number(), 7.0);
}

#[test]
fn test_to_number() {
    assert_eq!(FieldValue::Null.to_number(), 0.0);
    assert!(FieldValue::Undefined.to_number().is_nan());
    assert!(FieldValue::from("abc").to_number().is_nan());
    assert_eq!(FieldValue::from(" 12.5 ").to_number(), 12.5);
    assert_eq!(FieldValue::from(true).to_number(), 1.0);
}

#[test]
fn test_truthiness() {
    assert!(!FieldValue::from("").is_truthy());
    assert!(FieldValue::from("0").is_truthy());
    assert!(!FieldValue::from(0).is_truthy());
    assert!(!FieldValue::Number(f64::NAN).is_truthy());
    assert!(FieldValue::List(vec![]).is_truthy());
}

#[test]
fn test_emptiness_and_blankness() {
    assert!(FieldValue::from("").is_empty_value());
    assert!(!FieldValue::from("  ").is_empty_value());
    assert!(FieldValue::from("  ").is_blank());
    assert!(FieldValue::from(false).is_blank());
    assert!(!FieldValue::from(0).is_blank());
    assert!(FieldValue::List(vec![]).is_blank());
}

#[test]
fn test_display_string() {
    assert_eq!(FieldValue::from(3).to_display_string(), "3");
    assert_eq!(FieldValue::from(0.25).to_display_string(), "0.25");
    assert_eq!(
        FieldValue::List(vec![FieldValue::from(1), FieldValue::Null, FieldValue::from("x")])
            .to_display_string(),
        "1,,x"
    );
    assert_eq!(FieldValue::Undefined.to_string(), "undefined");
}

#[test]
fn test_json_conversion() {
    let value: FieldValue = serde_json::from_value(json!({"a": [1, "b", null], "c": true}))
        .expect("Should deserialize");
    let FieldValue::Map(entries) = &value else {
        panic!("expected a map, got {value:?}");
    };
    assert_eq!(entries["c"], FieldValue::Bool(true));

    let back = serde_json::to_value(&value).expect("Should serialize");
    assert_eq!(back, json!({"a": [1, "b", null], "c": true}));
    assert_eq!(
        serde_json::to_value(FieldValue::Undefined).expect("Should serialize"),
        json!(null)
    );
}

proptest! {
    #[test]
    fn prop_integers_survive_string_coercion(n in -1_000_000i64..1_000_000) {
        let text = FieldValue::from(n.to_string());
        prop_assert!(text.loose_eq(&FieldValue::from(n)));
        prop_assert_eq!(text.to_number(), n as f64);
    }

    #[test]
    fn prop_strict_equality_is_reflexive_for_strings(s in ".*") {
        let value = FieldValue::from(s);
        prop_assert!(value.strict_eq(&value.clone()));
    }
}
