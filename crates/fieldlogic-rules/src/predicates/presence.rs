//! Presence rules: `required`, `required_with`, `required_without`

use super::param_list;
use crate::registry::RuleRegistry;
use fieldlogic_domain::constants::RULE_REQUIRED;
use fieldlogic_domain::{FieldValue, Subject, SubjectKind};

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register_presence(RULE_REQUIRED, required);
    registry.register_presence("required_with", required_with);
    registry.register_presence("required_without", required_without);
}

/// Checkboxes must be checked, radios need a truthy value, everything else
/// needs non-blank text (or a non-empty list)
fn required(value: &FieldValue, _: Option<&str>, subject: &dyn Subject) -> bool {
    match subject.kind() {
        SubjectKind::Checkbox => subject.is_checked(),
        SubjectKind::Radio => value.is_truthy(),
        _ => match value {
            FieldValue::Undefined | FieldValue::Null => false,
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::Map(entries) => !entries.is_empty(),
            other => !other.to_display_string().trim().is_empty(),
        },
    }
}

/// Required when any listed sibling field has a value
fn required_with(value: &FieldValue, param: Option<&str>, subject: &dyn Subject) -> bool {
    let triggered = param_list(param)
        .into_iter()
        .any(|name| !subject.field_value(name).is_blank());
    !triggered || required(value, None, subject)
}

/// Required when any listed sibling field is blank
fn required_without(value: &FieldValue, param: Option<&str>, subject: &dyn Subject) -> bool {
    let triggered = param_list(param)
        .into_iter()
        .any(|name| subject.field_value(name).is_blank());
    !triggered || required(value, None, subject)
}
