//! Check-digit rules: payment cards, ISBN, ISSN

use super::text;
use crate::registry::RuleRegistry;

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register("credit_card", |value, _, _| is_credit_card(&text(value)));
    registry.register("isbn10", |value, _, _| is_isbn10(&strip_separators(&text(value))));
    registry.register("isbn13", |value, _, _| is_isbn13(&strip_separators(&text(value))));
    registry.register("isbn", |value, _, _| {
        let digits = strip_separators(&text(value));
        is_isbn10(&digits) || is_isbn13(&digits)
    });
    registry.register("issn", |value, _, _| is_issn(&text(value)));
}

fn strip_separators(s: &str) -> String {
    s.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

/// 12 to 19 digits (spaces and hyphens ignored) passing the Luhn check
fn is_credit_card(s: &str) -> bool {
    let digits = strip_separators(s);
    if !(12..=19).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    luhn(&digits)
}

fn luhn(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

fn is_isbn10(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    let mut sum = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let digit = match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            b'X' | b'x' if i == 9 => 10,
            _ => return false,
        };
        sum += (10 - i as u32) * digit;
    }
    sum % 11 == 0
}

fn is_isbn13(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 13 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let sum: u32 = bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    sum % 10 == 0
}

/// `NNNN-NNNC`, where the check character may be `X`
fn is_issn(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 9 || bytes[4] != b'-' {
        return false;
    }
    let mut sum = 0;
    for (weight, &b) in (2..=8).rev().zip(bytes[..4].iter().chain(&bytes[5..8])) {
        if !b.is_ascii_digit() {
            return false;
        }
        sum += weight * u32::from(b - b'0');
    }
    let check = match bytes[8] {
        b @ b'0'..=b'9' => u32::from(b - b'0'),
        b'X' | b'x' => 10,
        _ => return false,
    };
    (sum + check) % 11 == 0
}
