//! Dynamic field values
//!
//! Form fields carry loosely typed data: text inputs produce strings, numeric
//! inputs produce numbers, multi-selects produce lists and unset lookups
//! produce nothing at all. [`FieldValue`] models that data together with the
//! coercions expressions and rules rely on (numeric conversion, truthiness,
//! loose and strict equality, string conversion).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A loosely typed value observed on a form field
///
/// `Undefined` is distinct from `Null`: it is what a lookup yields when
/// nothing is there, and it is serialized as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum FieldValue {
    /// Nothing was found
    #[default]
    Undefined,
    /// Explicitly empty
    Null,
    /// Boolean flag
    Bool(bool),
    /// Any numeric value
    Number(f64),
    /// Text
    String(String),
    /// Ordered sequence (multi-select, file list)
    List(Vec<FieldValue>),
    /// Keyed structure
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Numeric conversion; values with no numeric reading become NaN
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Map(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::String(s) => string_to_number(s),
            Self::List(_) => string_to_number(&self.to_display_string()),
        }
    }

    /// Truthiness as used by bare value atoms and the radio `required` check
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::List(_) | Self::Map(_) => true,
        }
    }

    /// `Undefined`, `Null` or the empty string
    ///
    /// This is the emptiness that makes the rule engine skip every rule but
    /// `required`.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Absent for presence checks: empty, whitespace-only, `false`, or an
    /// empty collection
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Undefined | Self::Null | Self::Bool(false) => true,
            Self::String(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Bool(true) | Self::Number(_) => false,
        }
    }

    /// Borrow the text when the value is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Length in characters (strings) or elements (lists)
    pub fn length(&self) -> usize {
        match self {
            Self::String(s) => s.chars().count(),
            Self::List(items) => items.len(),
            other => other.to_display_string().chars().count(),
        }
    }

    /// String conversion with script-style formatting
    ///
    /// Integral numbers print without a fraction, lists join their elements
    /// with `,` (empty elements for null/undefined), maps print as
    /// `[object Object]`.
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::String(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(|item| match item {
                    Self::Undefined | Self::Null => String::new(),
                    other => other.to_display_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Map(_) => "[object Object]".to_string(),
        }
    }

    /// Equality without coercion (`===`)
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.strict_eq(y))
            }
            (Self::Map(a), Self::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.strict_eq(vb))
            }
            _ => false,
        }
    }

    /// Coercing equality (`==`)
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined | Self::Null, Self::Undefined | Self::Null) => true,
            (Self::Undefined | Self::Null, _) | (_, Self::Undefined | Self::Null) => false,
            (Self::Number(n), Self::String(s)) | (Self::String(s), Self::Number(n)) => {
                *n == string_to_number(s)
            }
            (Self::Bool(_), _) => Self::Number(self.to_number()).loose_eq(other),
            (_, Self::Bool(_)) => self.loose_eq(&Self::Number(other.to_number())),
            (Self::List(_) | Self::Map(_), Self::Number(_) | Self::String(_)) => {
                Self::String(self.to_display_string()).loose_eq(other)
            }
            (Self::Number(_) | Self::String(_), Self::List(_) | Self::Map(_)) => {
                self.loose_eq(&Self::String(other.to_display_string()))
            }
            _ => self.strict_eq(other),
        }
    }
}

/// Numeric reading of a string
///
/// Surrounding whitespace is ignored, the empty string reads as zero,
/// `Infinity` and `0x`/`0o`/`0b` prefixed integers are recognised, and
/// anything else that is not a plain decimal literal is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let text = s.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Undefined | FieldValue::Null => Self::Null,
            FieldValue::Bool(b) => Self::Bool(b),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                Self::from(n as i64)
            }
            FieldValue::Number(n) => serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number),
            FieldValue::String(s) => Self::String(s),
            FieldValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            FieldValue::Map(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
