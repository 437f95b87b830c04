//! Rule chain parsing
//!
//! A chain is a comma-separated list of tokens, each `name`, `name=param`
//! or `name:param`. The first `=` or `:` splits the name from the
//! parameter; everything after it is the parameter, verbatim.

use fieldlogic_domain::constants::{RULE_PARAM_SEPARATORS, RULE_SEPARATOR};
use std::fmt;

/// One rule reference in a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleToken {
    pub name: String,
    pub param: Option<String>,
}

impl RuleToken {
    /// Parse one token; blank tokens yield `None`
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(match token.find(RULE_PARAM_SEPARATORS) {
            Some(idx) => Self {
                name: token[..idx].trim().to_string(),
                param: Some(token[idx + 1..].to_string()),
            },
            None => Self {
                name: token.to_string(),
                param: None,
            },
        })
    }
}

impl fmt::Display for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}:{}", self.name, param),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Ordered rule tokens parsed from a chain string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleChain {
    tokens: Vec<RuleToken>,
}

impl RuleChain {
    pub fn parse(chain: &str) -> Self {
        Self {
            tokens: chain.split(RULE_SEPARATOR).filter_map(RuleToken::parse).collect(),
        }
    }

    pub fn tokens(&self) -> &[RuleToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether any token names `rule`
    pub fn contains(&self, rule: &str) -> bool {
        self.tokens.iter().any(|token| token.name == rule)
    }

    /// Append a token, e.g. `required` added by a dependency action
    pub fn push(&mut self, token: RuleToken) {
        self.tokens.push(token);
    }

    /// Drop every token naming `rule`
    pub fn remove(&mut self, rule: &str) {
        self.tokens.retain(|token| token.name != rule);
    }
}

impl fmt::Display for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.tokens.iter().map(ToString::to_string).collect();
        f.write_str(&rendered.join(","))
    }
}

impl<'a> IntoIterator for &'a RuleChain {
    type Item = &'a RuleToken;
    type IntoIter = std::slice::Iter<'a, RuleToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
