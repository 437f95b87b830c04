//! Format rules expressed as anchored patterns
//!
//! Character sets, case, colors, phone numbers, coordinates and the
//! identifier shapes (SSN, JWT, BIC, crypto addresses).

use super::text;
use crate::registry::RuleRegistry;
use fieldlogic_domain::FieldValue;
use regex::Regex;

const BYTE: &str = r"(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)";
const PERCENT: &str = r"(?:100|[1-9]?\d)%";
const ALPHA: &str = r"(?:0|1|0?\.\d+|1\.0+)";
const HUE: &str = r"(?:360|3[0-5]\d|[12]\d\d|[1-9]?\d)";

const PATTERNS: [(&str, &str); 19] = [
    ("alpha", r"^[a-zA-Z]+$"),
    ("alphanum", r"^[a-zA-Z0-9]+$"),
    ("alphaunicode", r"^\p{L}+$"),
    ("alphanumunicode", r"^[\p{L}\p{N}]+$"),
    ("numeric", r"^[-+]?[0-9]+(?:\.[0-9]+)?$"),
    ("number", r"^[0-9]+$"),
    ("hexadecimal", r"^(?:0[xX])?[0-9a-fA-F]+$"),
    ("ascii", r"^[\x00-\x7F]*$"),
    ("printascii", r"^[\x20-\x7E]*$"),
    ("multibyte", r"[^\x00-\x7F]"),
    ("e164", r"^\+[1-9]\d{1,14}$"),
    ("latitude", r"^[-+]?(?:90(?:\.0+)?|[1-8]?\d(?:\.\d+)?)$"),
    (
        "longitude",
        r"^[-+]?(?:180(?:\.0+)?|(?:1[0-7]\d|[1-9]?\d)(?:\.\d+)?)$",
    ),
    (
        "ssn",
        r"^[0-9]{3}[ -]?(?:0[1-9]|[1-9][0-9])[ -]?(?:[1-9][0-9]{3}|[0-9][1-9][0-9]{2}|[0-9]{2}[1-9][0-9]|[0-9]{3}[1-9])$",
    ),
    ("jwt", r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*$"),
    ("bic", r"^[A-Za-z]{6}[A-Za-z0-9]{2}(?:[A-Za-z0-9]{3})?$"),
    ("btc_addr", r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$"),
    (
        "btc_addr_bech32",
        r"^(?:bc1[02-9ac-hj-np-z]{7,76}|BC1[02-9AC-HJ-NP-Z]{7,76})$",
    ),
    ("eth_addr", r"^0x[0-9a-fA-F]{40}$"),
];

pub(super) fn register(registry: &mut RuleRegistry) {
    for (name, pattern) in PATTERNS {
        let pattern = Regex::new(pattern).expect("Invalid regex");
        registry.register(name, move |value, _, _| pattern.is_match(&text(value)));
    }

    let phone_chars = Regex::new(r"^\+?[0-9 ().-]+$").expect("Invalid regex");
    registry.register("phone", move |value, _, _| is_phone(&phone_chars, value));

    registry.register("lowercase", |value, _, _| {
        let s = text(value);
        !s.is_empty() && s == s.to_lowercase()
    });
    registry.register("uppercase", |value, _, _| {
        let s = text(value);
        !s.is_empty() && s == s.to_uppercase()
    });

    let colors = color_patterns();
    for (name, pattern) in &colors {
        let pattern = pattern.clone();
        registry.register(*name, move |value, _, _| pattern.is_match(&text(value)));
    }
    registry.register("iscolor", move |value, _, _| {
        let s = text(value);
        colors.iter().any(|(_, pattern)| pattern.is_match(&s))
    });
}

/// Phone numbers: digits with common punctuation, 7 to 15 digits
fn is_phone(pattern: &Regex, value: &FieldValue) -> bool {
    let s = text(value);
    let digits = s.chars().filter(char::is_ascii_digit).count();
    pattern.is_match(&s) && (7..=15).contains(&digits)
}

fn color_patterns() -> Vec<(&'static str, Regex)> {
    let rgb_triplet = format!(
        r"(?:{BYTE}\s*,\s*{BYTE}\s*,\s*{BYTE}|{PERCENT}\s*,\s*{PERCENT}\s*,\s*{PERCENT})"
    );
    let hsl_triplet = format!(r"{HUE}\s*,\s*{PERCENT}\s*,\s*{PERCENT}");
    [
        (
            "hexcolor",
            r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$".to_string(),
        ),
        ("rgb", format!(r"^rgb\(\s*{rgb_triplet}\s*\)$")),
        ("rgba", format!(r"^rgba\(\s*{rgb_triplet}\s*,\s*{ALPHA}\s*\)$")),
        ("hsl", format!(r"^hsl\(\s*{hsl_triplet}\s*\)$")),
        ("hsla", format!(r"^hsla\(\s*{hsl_triplet}\s*,\s*{ALPHA}\s*\)$")),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(&pattern).expect("Invalid regex")))
    .collect()
}
