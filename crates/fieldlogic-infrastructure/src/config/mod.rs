//! Application configuration
//!
//! Three sections, all optional in the TOML file:
//!
//! ```toml
//! [logging]
//! level = "warn"
//! json_format = false
//!
//! [expressions]
//! max_depth = 32
//!
//! [rules]
//! strict_unknown_rules = false
//! ```

pub mod loader;

pub use loader::ConfigLoader;

use crate::constants::DEFAULT_LOG_LEVEL;
use fieldlogic_domain::constants::DEFAULT_MAX_EXPRESSION_DEPTH;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub expressions: ExpressionsConfig,
    pub rules: RulesConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Expression evaluator limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionsConfig {
    /// Maximum nesting of parenthesised groups
    pub max_depth: usize,
}

impl Default for ExpressionsConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_EXPRESSION_DEPTH,
        }
    }
}

/// Rule engine behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Reject schemas whose rule chains name unregistered rules
    pub strict_unknown_rules: bool,
}
