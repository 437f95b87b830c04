//! Form state snapshot

use fieldlogic_domain::FieldValue;
use fieldlogic_expr::FieldResolver;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Current values and checked flags, keyed by field name
///
/// ```json
/// { "values": { "age": 21, "country": "US" }, "checked": ["terms"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub values: HashMap<String, FieldValue>,
    pub checked: BTreeSet<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_checked(mut self, name: impl Into<String>) -> Self {
        self.checked.insert(name.into());
        self
    }

    /// Value of `name`, `Undefined` when absent
    pub fn value(&self, name: &str) -> FieldValue {
        self.values.get(name).cloned().unwrap_or_default()
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.contains(name)
    }

    pub fn from_json(text: &str) -> fieldlogic_domain::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl FieldResolver for FormState {
    fn resolve_field(&self, name: &str) -> FieldValue {
        self.value(name)
    }
}
