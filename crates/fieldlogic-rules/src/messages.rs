//! Message Catalog
//!
//! Maps rule names to human-readable templates. Templates may reference
//! `{field}` (the field label) and `{param}` (the failing rule's parameter).
//! A `default` template covers rules without their own entry.

use crate::outcome::RuleOutcome;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Template key used when a rule has no template of its own
pub const DEFAULT_TEMPLATE: &str = "default";

const ENGLISH: [(&str, &str); 24] = [
    (DEFAULT_TEMPLATE, "{field} is invalid"),
    ("required", "{field} is required"),
    ("required_with", "{field} is required when {param} is present"),
    ("required_without", "{field} is required when {param} is missing"),
    ("eq", "{field} must equal {param}"),
    ("ne", "{field} must not equal {param}"),
    ("lt", "{field} must be less than {param}"),
    ("lte", "{field} must be at most {param}"),
    ("gt", "{field} must be greater than {param}"),
    ("gte", "{field} must be at least {param}"),
    ("eqfield", "{field} must match {param}"),
    ("nefield", "{field} must differ from {param}"),
    ("len", "{field} must be exactly {param} long"),
    ("min", "{field} must be at least {param}"),
    ("max", "{field} must be at most {param}"),
    ("min_letters", "{field} needs at least {param} letters"),
    ("min_uppercase", "{field} needs at least {param} uppercase letters"),
    ("min_digits", "{field} needs at least {param} digits"),
    ("min_symbols", "{field} needs at least {param} symbols"),
    ("email", "{field} must be a valid email address"),
    ("url", "{field} must be a valid URL"),
    ("oneof", "{field} must be one of {param}"),
    ("datetime", "{field} must be a valid date"),
    ("ext", "{field} must have one of the extensions {param}"),
];

/// Rule name to message template map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// Empty catalog; renders nothing until templates are added
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English templates
    pub fn english() -> Self {
        ENGLISH
            .into_iter()
            .fold(Self::new(), |catalog, (rule, template)| {
                catalog.with_template(rule, template)
            })
    }

    /// Add or replace the template for `rule`
    #[must_use]
    pub fn with_template(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(rule.into(), template.into());
        self
    }

    pub fn template(&self, rule: &str) -> Option<&str> {
        self.templates
            .get(rule)
            .or_else(|| self.templates.get(DEFAULT_TEMPLATE))
            .map(String::as_str)
    }

    /// Message for a failed outcome, `None` for valid outcomes or when no
    /// template applies
    pub fn render(&self, outcome: &RuleOutcome, label: &str) -> Option<String> {
        let rule = outcome.failed()?;
        let template = self.template(rule)?;
        Some(
            template
                .replace("{field}", label)
                .replace("{param}", outcome.param().unwrap_or_default()),
        )
    }
}
