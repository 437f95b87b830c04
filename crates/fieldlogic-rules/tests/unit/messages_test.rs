//! Tests for message rendering

use crate::test_utils::check;
use fieldlogic_rules::{MessageCatalog, RuleOutcome};

#[test]
fn test_render_substitutes_placeholders() {
    let catalog = MessageCatalog::english();
    let outcome = check("hi", "min:3");
    assert_eq!(
        catalog.render(&outcome, "Username").as_deref(),
        Some("Username must be at least 3")
    );
}

#[test]
fn test_render_valid_outcome_is_none() {
    assert_eq!(MessageCatalog::english().render(&RuleOutcome::Valid, "Name"), None);
}

#[test]
fn test_default_template_fallback() {
    let outcome = check("abc", "uuid");
    assert_eq!(
        MessageCatalog::english().render(&outcome, "Token").as_deref(),
        Some("Token is invalid")
    );
    assert_eq!(MessageCatalog::new().render(&outcome, "Token"), None);
}

#[test]
fn test_custom_templates_override() {
    let catalog = MessageCatalog::english()
        .with_template("required", "Bitte {field} ausfüllen")
        .with_template("uuid", "{field}: kein UUID");
    assert_eq!(
        catalog.render(&check("", "required"), "Name").as_deref(),
        Some("Bitte Name ausfüllen")
    );
    assert_eq!(
        catalog.render(&check("x", "uuid"), "Id").as_deref(),
        Some("Id: kein UUID")
    );
}

#[test]
fn test_catalog_deserializes_from_map() {
    let catalog: MessageCatalog =
        serde_json::from_str(r#"{"default": "{field} looks wrong ({param})"}"#).unwrap();
    let outcome = check("x", "len:3");
    assert_eq!(catalog.render(&outcome, "Code").as_deref(), Some("Code looks wrong (3)"));
}
