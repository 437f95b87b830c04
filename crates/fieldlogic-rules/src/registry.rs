//! Rule Registry
//!
//! Maps rule names to typed predicates. The standard set is populated once
//! at construction; further rules are added explicitly with
//! [`RuleRegistry::register`] or [`RuleRegistry::register_presence`].

use crate::predicates;
use fieldlogic_domain::{FieldValue, Subject};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A validation predicate: `(value, parameter, subject) -> passes`
pub type RulePredicate = Arc<dyn Fn(&FieldValue, Option<&str>, &dyn Subject) -> bool + Send + Sync>;

/// A registered rule
#[derive(Clone)]
pub struct RuleDefinition {
    predicate: RulePredicate,
    runs_on_empty: bool,
}

impl RuleDefinition {
    /// Whether the rule is evaluated when the value is empty
    ///
    /// Only presence rules are; every other rule passes vacuously.
    pub fn runs_on_empty(&self) -> bool {
        self.runs_on_empty
    }

    pub fn check(&self, value: &FieldValue, param: Option<&str>, subject: &dyn Subject) -> bool {
        (self.predicate)(value, param, subject)
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("runs_on_empty", &self.runs_on_empty)
            .finish_non_exhaustive()
    }
}

/// Registry holding all known rules
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, RuleDefinition>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry with all standard rules
    pub fn standard() -> Self {
        let mut registry = Self::new();
        predicates::register_standard(&mut registry);
        registry
    }

    /// Add (or replace) a rule that is skipped for empty values
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&FieldValue, Option<&str>, &dyn Subject) -> bool + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(predicate), false);
    }

    /// Add (or replace) a presence rule, evaluated even for empty values
    pub fn register_presence<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&FieldValue, Option<&str>, &dyn Subject) -> bool + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(predicate), true);
    }

    fn insert(&mut self, name: String, predicate: RulePredicate, runs_on_empty: bool) {
        self.rules.insert(
            name,
            RuleDefinition {
                predicate,
                runs_on_empty,
            },
        );
    }

    /// Get a rule by name
    pub fn get(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
