//! Form schema
//!
//! ```toml
//! [[fields]]
//! name = "email"
//! kind = "text"
//! label = "E-mail"
//! rules = "email"
//!
//! [[fields.dependencies]]
//! action = "require"
//! when = "fields.newsletter == true"
//! ```

use fieldlogic_domain::{Error, Result, SubjectKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use validator::Validate;

/// Effect of a dependency whose condition holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyAction {
    Show,
    Hide,
    Enable,
    Disable,
    Require,
    Optional,
}

/// Conditional action on a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Dependency {
    pub action: DependencyAction,

    /// Expression evaluated with the field as subject
    #[validate(length(min = 1, message = "dependency condition cannot be empty"))]
    pub when: String,
}

/// One field of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FieldSpec {
    #[validate(length(min = 1, message = "field name cannot be empty"))]
    pub name: String,

    #[serde(default)]
    pub kind: SubjectKind,

    /// Display name used in messages; defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Rule chain, e.g. `required,min:3`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,

    /// Applied in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub dependencies: Vec<Dependency>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: SubjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            rules: None,
            dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, action: DependencyAction, when: impl Into<String>) -> Self {
        self.dependencies.push(Dependency {
            action,
            when: when.into(),
        });
        self
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn rules(&self) -> &str {
        self.rules.as_deref().unwrap_or_default()
    }
}

/// A form: fields in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FormSchema {
    #[serde(default)]
    #[validate(nested)]
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Parse and check a JSON schema
    pub fn from_json(text: &str) -> Result<Self> {
        let schema: Self = serde_json::from_str(text)?;
        schema.check()?;
        Ok(schema)
    }

    /// Parse and check a TOML schema
    pub fn from_toml(text: &str) -> Result<Self> {
        let schema: Self =
            toml::from_str(text).map_err(|e| Error::schema(format!("Invalid TOML schema: {e}")))?;
        schema.check()?;
        Ok(schema)
    }

    /// Load a schema file; `.toml` files are read as TOML, anything else
    /// as JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml")) {
            Self::from_toml(&text)
        } else {
            Self::from_json(&text)
        }
    }

    /// Structural checks: non-empty names and conditions, unique names
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| Error::schema(errors.to_string()))?;

        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::schema(format!("duplicate field name: {}", field.name)));
            }
        }
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}
