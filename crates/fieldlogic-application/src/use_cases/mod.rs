//! Application use cases

pub mod form_evaluator;

pub use form_evaluator::FormEvaluator;
