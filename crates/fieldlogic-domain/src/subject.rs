//! Validation subjects
//!
//! A subject is the field a rule chain is evaluated against. Rules only need
//! three things from it: what kind of input it is, whether it is checked,
//! and the current value of another field in the same owning group.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Input type discriminator of a subject field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    /// Checkbox (presence is the checked flag)
    Checkbox,
    /// Radio button (presence is value truthiness)
    Radio,
    /// Numeric input
    Number,
    /// Slider input, compared numerically like `Number`
    Range,
    /// File picker
    File,
    /// Free text and every other text-like widget
    #[default]
    Text,
    /// Anything else (custom widgets)
    Other,
}

impl SubjectKind {
    /// Whether `min`/`max` compare numerically instead of by length
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Range)
    }

    /// Map an HTML-like input type name to a kind
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.trim().to_ascii_lowercase().as_str() {
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "number" => Self::Number,
            "range" => Self::Range,
            "file" => Self::File,
            "text" | "textarea" | "email" | "password" | "search" | "tel" | "url" | "date"
            | "datetime-local" | "time" | "month" | "week" | "color" | "hidden" | "select" => {
                Self::Text
            }
            _ => Self::Other,
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkbox => write!(f, "checkbox"),
            Self::Radio => write!(f, "radio"),
            Self::Number => write!(f, "number"),
            Self::Range => write!(f, "range"),
            Self::File => write!(f, "file"),
            Self::Text => write!(f, "text"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// The field a rule chain is evaluated against
pub trait Subject {
    /// Input type of the field
    fn kind(&self) -> SubjectKind;

    /// Checked flag (meaningful for checkboxes and radios)
    fn is_checked(&self) -> bool {
        false
    }

    /// Current value of another field in the same owning group
    ///
    /// Returns [`FieldValue::Undefined`] when the group has no such field.
    fn field_value(&self, name: &str) -> FieldValue;
}

/// Owned subject descriptor with a snapshot of its sibling fields
#[derive(Debug, Clone, Default)]
pub struct FieldSubject {
    kind: SubjectKind,
    checked: bool,
    siblings: HashMap<String, FieldValue>,
}

impl FieldSubject {
    /// Create a subject of the given kind with no siblings
    pub fn new(kind: SubjectKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the checked flag
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Add one sibling field value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.siblings.insert(name.into(), value.into());
        self
    }

    /// Replace the sibling snapshot
    pub fn with_fields(mut self, siblings: HashMap<String, FieldValue>) -> Self {
        self.siblings = siblings;
        self
    }
}

impl Subject for FieldSubject {
    fn kind(&self) -> SubjectKind {
        self.kind
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn field_value(&self, name: &str) -> FieldValue {
        self.siblings.get(name).cloned().unwrap_or_default()
    }
}
