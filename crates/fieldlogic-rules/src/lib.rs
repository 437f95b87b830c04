//! # Rule-Chain Validation
//!
//! Validates a single form value against a comma-separated rule chain such
//! as `required,min:3,max=20,email`. Each token names a rule and an
//! optional parameter after `=` or `:`. Rules run in order and the first
//! failure is reported.
//!
//! ```
//! use fieldlogic_domain::{FieldSubject, FieldValue, SubjectKind};
//!
//! let subject = FieldSubject::new(SubjectKind::Text);
//! let outcome = fieldlogic_rules::validate(&FieldValue::from("hi"), "required,min:3", &subject);
//! assert_eq!(outcome.failed(), Some("min"));
//! ```
//!
//! Empty values (`null`, `undefined`, `""`) only meet presence rules
//! (`required`, `required_with`, `required_without`); everything else
//! passes vacuously. Unknown rule names are skipped; use
//! [`RuleEngine::check_chain`] to reject them up front.

pub mod chain;
pub mod engine;
pub mod messages;
pub mod outcome;
pub mod predicates;
pub mod registry;

pub use chain::{RuleChain, RuleToken};
pub use engine::RuleEngine;
pub use messages::MessageCatalog;
pub use outcome::RuleOutcome;
pub use registry::{RuleDefinition, RulePredicate, RuleRegistry};

use fieldlogic_domain::{FieldValue, Subject};
use std::sync::LazyLock;

static STANDARD_ENGINE: LazyLock<RuleEngine> = LazyLock::new(RuleEngine::standard);

/// Validate `value` against `chain` with the standard rule set
pub fn validate(value: &FieldValue, chain: &str, subject: &dyn Subject) -> RuleOutcome {
    STANDARD_ENGINE.validate(value, chain, subject)
}
