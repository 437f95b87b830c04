//! Character composition rules
//!
//! Each rule counts matches of a fixed character class and requires at
//! least `param` of them (one when the parameter is absent).

use super::text;
use crate::registry::RuleRegistry;
use regex::Regex;

const CLASSES: [(&str, &str); 4] = [
    ("min_letters", r"\p{L}"),
    ("min_uppercase", r"\p{Lu}"),
    ("min_digits", r"[0-9]"),
    ("min_symbols", r"[^\p{L}\p{N}\s]"),
];

pub(super) fn register(registry: &mut RuleRegistry) {
    for (name, class) in CLASSES {
        let pattern = Regex::new(class).expect("Invalid regex");
        registry.register(name, move |value, param, _| {
            let Some(minimum) = minimum_count(param) else {
                return false;
            };
            pattern.find_iter(&text(value)).count() >= minimum
        });
    }
}

fn minimum_count(param: Option<&str>) -> Option<usize> {
    match param.map(str::trim) {
        None | Some("") => Some(1),
        Some(p) => p.parse().ok(),
    }
}
