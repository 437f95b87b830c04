//! Form evaluation results

use fieldlogic_rules::RuleOutcome;
use serde::{Deserialize, Serialize};

/// Outcome for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    pub name: String,
    pub visible: bool,
    pub disabled: bool,
    pub required: bool,
    /// Hidden and disabled fields are not validated
    pub skipped: bool,
    pub outcome: RuleOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

/// Outcome for a whole form, fields in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    pub valid: bool,
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    pub fn new(fields: Vec<FieldReport>) -> Self {
        Self {
            valid: fields.iter().all(FieldReport::is_valid),
            fields,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn field(&self, name: &str) -> Option<&FieldReport> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|field| !field.is_valid())
    }
}

/// Problem found by static inspection of a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintFinding {
    /// Rule chain names a rule that is not registered
    UnknownRule { field: String, rule: String },
    /// Dependency condition that cannot be evaluated
    InvalidExpression {
        field: String,
        expression: String,
        message: String,
    },
}
