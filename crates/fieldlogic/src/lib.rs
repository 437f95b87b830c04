//! # fieldlogic
//!
//! Conditional form logic and rule-chain validation.
//!
//! - [`expr`]: a restricted expression language deciding whether a field's
//!   conditional action applies (`fields.country == 'US' && value >= 18`)
//! - [`rules`]: rule chains such as `required,min:3,email` validated
//!   against one value
//! - [`application`]: whole-form evaluation from a declarative schema
//!
//! ## Example
//!
//! ```
//! use fieldlogic::domain::{FieldSubject, FieldValue, SubjectKind};
//!
//! let age = FieldSubject::new(SubjectKind::Number);
//! assert!(!fieldlogic::rules::validate(&FieldValue::from(4), "min:5", &age).is_valid());
//!
//! let fields = |_: &str| FieldValue::from("US");
//! let state = fieldlogic::expr::FieldState::default();
//! assert!(fieldlogic::expr::evaluate("fields.country === 'US'", &FieldValue::Null, &state, &fields));
//! ```

pub mod cli;

/// Domain layer - values, subjects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use fieldlogic_domain::*;
}

/// Expression evaluator
///
/// Re-exports from the expression crate for convenience
pub mod expr {
    pub use fieldlogic_expr::*;
}

/// Rule-chain validation
///
/// Re-exports from the rules crate for convenience
pub mod rules {
    pub use fieldlogic_rules::*;
}

/// Application layer - form schemas and evaluation
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use fieldlogic_application::*;
}

/// Infrastructure layer - configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use fieldlogic_infrastructure::*;
}

use fieldlogic_application::FormEvaluator;
use fieldlogic_expr::ExpressionEngine;
use fieldlogic_infrastructure::AppConfig;
use fieldlogic_rules::{MessageCatalog, RuleEngine};

/// Expression engine honouring the configured limits
pub fn expression_engine(config: &AppConfig) -> ExpressionEngine {
    ExpressionEngine::new().with_max_depth(config.expressions.max_depth)
}

/// Form evaluator wired from configuration with the standard rules and
/// English messages
pub fn form_evaluator(config: &AppConfig) -> FormEvaluator {
    FormEvaluator::new(
        expression_engine(config),
        RuleEngine::standard(),
        MessageCatalog::english(),
    )
    .with_strict_unknown_rules(config.rules.strict_unknown_rules)
}
