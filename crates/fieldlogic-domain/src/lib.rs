//! # fieldlogic domain
//!
//! Core types shared by the expression evaluator and the rule engine:
//!
//! - [`FieldValue`] - loosely typed form value with its coercions
//! - [`Subject`] / [`FieldSubject`] - the field a rule chain runs against
//! - [`Error`] / [`Result`] - error type for every fieldlogic crate
//! - [`constants`] - context keys, guarded path segments, rule syntax

pub mod constants;
pub mod error;
pub mod subject;
pub mod value;

pub use error::{Error, Result};
pub use subject::{FieldSubject, Subject, SubjectKind};
pub use value::FieldValue;
