//! Date, time and timezone rules
//!
//! `datetime` without a parameter accepts RFC 3339, RFC 2822 and a handful
//! of ISO-like forms. With a parameter, the parameter is a reference-time
//! layout (`2006-01-02 15:04:05`) translated to an anchored pattern by
//! [`layout_to_pattern`].

use super::text;
use crate::registry::RuleRegistry;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dashmap::DashMap;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled layout patterns, keyed by layout; `None` marks a layout that
/// does not compile
static LAYOUT_PATTERNS: LazyLock<DashMap<String, Option<Regex>>> = LazyLock::new(DashMap::new);

/// Layout tokens and the pattern each stands for, longest first
const LAYOUT_TOKENS: [(&str, &str); 11] = [
    ("Z0700", r"(?:Z|[+-]\d{4})"),
    ("2006", r"\d{4}"),
    ("MST", r"[A-Z]{3}"),
    ("PM", r"(?:AM|PM)"),
    ("01", r"(?:0[1-9]|1[0-2])"),
    ("02", r"(?:0[1-9]|[12]\d|3[01])"),
    ("03", r"(?:0[1-9]|1[0-2])"),
    ("04", r"[0-5]\d"),
    ("05", r"[0-5]\d"),
    ("06", r"\d{2}"),
    ("15", r"(?:[01]\d|2[0-3])"),
];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

const NAIVE_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register("timezone", |value, _, _| {
        text(value).parse::<chrono_tz::Tz>().is_ok()
    });
    registry.register("datetime", |value, param, _| {
        let s = text(value);
        match param.filter(|layout| !layout.is_empty()) {
            Some(layout) => matches_layout(layout, &s),
            None => is_datetime(&s),
        }
    });
}

/// Translate a reference-time layout into an anchored regular expression
///
/// Recognised tokens are replaced by their digit/letter classes; every
/// other character is matched literally.
pub fn layout_to_pattern(layout: &str) -> String {
    let mut pattern = String::from("^");
    let mut rest = layout;
    'scan: while !rest.is_empty() {
        for (token, replacement) in LAYOUT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                pattern.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
        rest = chars.as_str();
    }
    pattern.push('$');
    pattern
}

fn matches_layout(layout: &str, s: &str) -> bool {
    if let Some(entry) = LAYOUT_PATTERNS.get(layout) {
        return entry.value().as_ref().is_some_and(|re| re.is_match(s));
    }
    let compiled = Regex::new(&layout_to_pattern(layout)).ok();
    let matched = compiled.as_ref().is_some_and(|re| re.is_match(s));
    LAYOUT_PATTERNS.insert(layout.to_string(), compiled);
    matched
}

fn is_datetime(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_rfc2822(s).is_ok()
        || NAIVE_DATETIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(s, format).is_ok())
        || NAIVE_DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(s, format).is_ok())
}
