//! Operand resolution
//!
//! Turns the text on either side of an operator (or a bare atom) into a
//! [`FieldValue`]. Only three pathways reach data: exact context keys,
//! `fields.` through the caller's resolver, and `source.` / dotted paths
//! rooted in the context. Anything unrecognised is its own text.

use crate::context::{EvaluationContext, FieldResolver};
use fieldlogic_domain::constants::{FIELDS_PREFIX, GUARDED_SEGMENTS, SOURCE_PREFIX};
use fieldlogic_domain::{Error, FieldValue, Result};
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?$").expect("Invalid regex")
});

fn is_guarded(segment: &str) -> bool {
    GUARDED_SEGMENTS.contains(&segment)
}

/// Resolves operands against one evaluation's context and field resolver
pub struct OperandResolver<'a> {
    context: &'a EvaluationContext,
    fields: &'a dyn FieldResolver,
}

impl<'a> OperandResolver<'a> {
    pub fn new(context: &'a EvaluationContext, fields: &'a dyn FieldResolver) -> Self {
        Self { context, fields }
    }

    /// Resolve one operand
    ///
    /// Fails only when the operand text is empty.
    pub fn resolve(&self, operand: &str) -> Result<FieldValue> {
        let text = operand.trim();
        if text.is_empty() {
            return Err(Error::expression("empty operand"));
        }

        if let Some(literal) = unquote(text) {
            return Ok(FieldValue::String(literal.to_string()));
        }

        if NUMERIC_LITERAL.is_match(text) {
            if let Ok(n) = text.parse::<f64>() {
                if n.is_finite() {
                    return Ok(FieldValue::Number(n));
                }
            }
        }

        match text {
            "true" => return Ok(FieldValue::Bool(true)),
            "false" => return Ok(FieldValue::Bool(false)),
            "null" => return Ok(FieldValue::Null),
            "undefined" => return Ok(FieldValue::Undefined),
            _ => {}
        }

        if let Some(value) = self.context.get(text) {
            return Ok(value.clone());
        }

        if let Some(name) = text.strip_prefix(FIELDS_PREFIX) {
            if name.split('.').any(is_guarded) {
                return Ok(FieldValue::Null);
            }
            return Ok(self.fields.resolve_field(name));
        }

        if let Some(key) = text.strip_prefix(SOURCE_PREFIX) {
            if key.split('.').any(is_guarded) {
                return Ok(FieldValue::Null);
            }
            return Ok(match key.split_once('.') {
                Some((root, rest)) => self
                    .context
                    .get(root)
                    .map_or(FieldValue::Undefined, |value| walk_path(value, rest)),
                None => self.context.get(key).cloned().unwrap_or_default(),
            });
        }

        if let Some((root, rest)) = text.split_once('.') {
            if let Some(value) = self.context.get(root) {
                return Ok(walk_path(value, rest));
            }
        }

        Ok(FieldValue::String(text.to_string()))
    }
}

/// Inner text of a single- or double-quoted literal
fn unquote(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return Some(&text[1..text.len() - 1]);
        }
    }
    None
}

/// Follow `path` one segment at a time from `root`
///
/// Guarded segments and null/undefined intermediates yield `Null`. Maps are
/// indexed by key, lists by decimal index, and strings/lists expose
/// `length`. Missing members yield `Undefined`.
fn walk_path(root: &FieldValue, path: &str) -> FieldValue {
    let mut current = root.clone();
    for segment in path.split('.') {
        if is_guarded(segment) {
            return FieldValue::Null;
        }
        current = match current {
            FieldValue::Undefined | FieldValue::Null => return FieldValue::Null,
            FieldValue::Map(mut entries) => entries.remove(segment).unwrap_or_default(),
            FieldValue::List(items) if segment == "length" => FieldValue::from(items.len() as f64),
            FieldValue::List(mut items) => match segment.parse::<usize>() {
                Ok(index) if index < items.len() => items.swap_remove(index),
                _ => FieldValue::Undefined,
            },
            FieldValue::String(s) if segment == "length" => {
                FieldValue::from(s.chars().count() as f64)
            }
            _ => FieldValue::Undefined,
        };
    }
    current
}
