//! Application Layer - fieldlogic
//!
//! Orchestrates the expression evaluator and the rule engine over a whole
//! form:
//!
//! - [`schema`]: declarative form description (fields, rule chains,
//!   conditional dependencies), loaded from JSON or TOML
//! - [`state`]: a snapshot of field values and checked flags
//! - [`use_cases::form_evaluator`]: applies dependencies, validates visible
//!   and enabled fields and renders messages
//!
//! This crate depends only on the domain crate and the two engines.

pub mod report;
pub mod schema;
pub mod state;
pub mod use_cases;

pub use report::{FieldReport, FormReport, LintFinding};
pub use schema::{Dependency, DependencyAction, FieldSpec, FormSchema};
pub use state::FormState;
pub use use_cases::form_evaluator::FormEvaluator;
