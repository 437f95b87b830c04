//! Evaluation context and caller capabilities
//!
//! The evaluator never reads storage itself: the subject field's state flags
//! come from a [`StateProvider`] and other fields come from a
//! [`FieldResolver`]. Both are implemented for plain closures.

use fieldlogic_domain::FieldValue;
use fieldlogic_domain::constants::CONTEXT_KEY_VALUE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// State flags of the subject field exposed to expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateAttribute {
    Disabled,
    Readonly,
    Required,
    Visible,
    Checked,
}

impl StateAttribute {
    /// Every attribute, in context construction order
    pub const ALL: [Self; 5] = [
        Self::Disabled,
        Self::Readonly,
        Self::Required,
        Self::Visible,
        Self::Checked,
    ];

    /// Context key under which the attribute is exposed
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Readonly => "readonly",
            Self::Required => "required",
            Self::Visible => "visible",
            Self::Checked => "checked",
        }
    }
}

/// Supplies the subject field's state flags
pub trait StateProvider {
    fn state(&self, attribute: StateAttribute) -> FieldValue;
}

impl<F> StateProvider for F
where
    F: Fn(StateAttribute) -> FieldValue,
{
    fn state(&self, attribute: StateAttribute) -> FieldValue {
        self(attribute)
    }
}

/// Supplies the current value of another named field
pub trait FieldResolver {
    fn resolve_field(&self, name: &str) -> FieldValue;
}

impl<F> FieldResolver for F
where
    F: Fn(&str) -> FieldValue,
{
    fn resolve_field(&self, name: &str) -> FieldValue {
        self(name)
    }
}

impl FieldResolver for HashMap<String, FieldValue> {
    fn resolve_field(&self, name: &str) -> FieldValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

/// Plain boolean state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldState {
    pub disabled: bool,
    pub readonly: bool,
    pub required: bool,
    pub visible: bool,
    pub checked: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            disabled: false,
            readonly: false,
            required: false,
            visible: true,
            checked: false,
        }
    }
}

impl StateProvider for FieldState {
    fn state(&self, attribute: StateAttribute) -> FieldValue {
        FieldValue::Bool(match attribute {
            StateAttribute::Disabled => self.disabled,
            StateAttribute::Readonly => self.readonly,
            StateAttribute::Required => self.required,
            StateAttribute::Visible => self.visible,
            StateAttribute::Checked => self.checked,
        })
    }
}

/// The fixed set of values an expression can name directly
///
/// Built fresh for every evaluation and never mutated afterwards. Lookups
/// only ever hit the six fixed keys.
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    entries: Vec<(&'static str, FieldValue)>,
}

impl EvaluationContext {
    /// Snapshot the current value and the subject's state flags
    pub fn build(current_value: &FieldValue, state: &dyn StateProvider) -> Self {
        let mut entries = Vec::with_capacity(StateAttribute::ALL.len() + 1);
        entries.push((CONTEXT_KEY_VALUE, current_value.clone()));
        for attribute in StateAttribute::ALL {
            entries.push((attribute.as_str(), state.state(attribute)));
        }
        Self { entries }
    }

    /// Value stored under an exact context key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}
