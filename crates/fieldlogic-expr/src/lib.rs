//! # fieldlogic expressions
//!
//! A small, restricted expression language deciding whether a form field's
//! conditional action (show, hide, enable, require...) applies.
//!
//! The language has no assignment, no calls beyond `includes`,
//! `startsWith` and `endsWith`, and no access outside the evaluation
//! context, the caller's field resolver and the `source.` alias. Malformed
//! input evaluates to `false`.
//!
//! ```
//! use fieldlogic_domain::FieldValue;
//! use fieldlogic_expr::{FieldState, evaluate};
//!
//! let fields = |name: &str| match name {
//!     "country" => FieldValue::from("US"),
//!     _ => FieldValue::Undefined,
//! };
//! let shown = evaluate(
//!     "fields.country == 'US' && value >= 18",
//!     &FieldValue::from(21),
//!     &FieldState::default(),
//!     &fields,
//! );
//! assert!(shown);
//! ```

pub mod context;
pub mod engine;
pub mod operators;
pub mod resolve;
mod scan;

pub use context::{EvaluationContext, FieldResolver, FieldState, StateAttribute, StateProvider};
pub use engine::ExpressionEngine;
pub use operators::{ComparisonOperator, MethodName};

use fieldlogic_domain::FieldValue;

/// Evaluate `expression` with the default engine, failing closed
pub fn evaluate(
    expression: &str,
    current_value: &FieldValue,
    state: &dyn StateProvider,
    fields: &dyn FieldResolver,
) -> bool {
    ExpressionEngine::new().evaluate(expression, current_value, state, fields)
}
