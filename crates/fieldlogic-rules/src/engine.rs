//! Rule Engine
//!
//! Runs a rule chain against one value, stopping at the first failure.
//! Unknown rule names are skipped, and empty values (`null`, `undefined`,
//! `""`) skip every rule except presence rules.

use crate::chain::RuleChain;
use crate::outcome::RuleOutcome;
use crate::registry::RuleRegistry;
use fieldlogic_domain::{Error, FieldValue, Result, Subject};
use tracing::{debug, trace};

/// Engine evaluating rule chains against a registry
#[derive(Debug, Clone)]
pub struct RuleEngine {
    registry: RuleRegistry,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleEngine {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Engine over the standard rule set
    pub fn standard() -> Self {
        Self::new(RuleRegistry::standard())
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate `value` against a chain string
    pub fn validate(&self, value: &FieldValue, chain: &str, subject: &dyn Subject) -> RuleOutcome {
        self.validate_chain(value, &RuleChain::parse(chain), subject)
    }

    /// Validate `value` against an already parsed chain
    pub fn validate_chain(
        &self,
        value: &FieldValue,
        chain: &RuleChain,
        subject: &dyn Subject,
    ) -> RuleOutcome {
        let empty = value.is_empty_value();
        for token in chain {
            let Some(rule) = self.registry.get(&token.name) else {
                debug!(rule = %token.name, "Skipping unknown rule");
                continue;
            };
            if empty && !rule.runs_on_empty() {
                trace!(rule = %token.name, "Skipping rule for empty value");
                continue;
            }
            if !rule.check(value, token.param.as_deref(), subject) {
                debug!(rule = %token.name, param = ?token.param, "Rule failed");
                return RuleOutcome::invalid(token.name.clone(), token.param.clone());
            }
        }
        RuleOutcome::Valid
    }

    /// Names in `chain` that are not registered, in chain order
    pub fn unknown_rules(&self, chain: &str) -> Vec<String> {
        RuleChain::parse(chain)
            .tokens()
            .iter()
            .filter(|token| !self.registry.contains(&token.name))
            .map(|token| token.name.clone())
            .collect()
    }

    /// Fail on the first malformed token or unregistered rule name in `chain`
    ///
    /// A token whose rule name is empty (`:5`, `=x`) is malformed.
    pub fn check_chain(&self, chain: &str) -> Result<()> {
        let chain = RuleChain::parse(chain);
        if let Some(token) = chain.tokens().iter().find(|token| token.name.is_empty()) {
            return Err(Error::invalid_rule_chain(format!(
                "token '{token}' has no rule name"
            )));
        }
        match chain.tokens().iter().find(|token| !self.registry.contains(&token.name)) {
            Some(token) => Err(Error::unknown_rule(token.name.clone())),
            None => Ok(()),
        }
    }
}
