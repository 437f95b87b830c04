//! Textual scanning helpers
//!
//! Splitting is textual: only parenthesis depth is tracked, quotes are not.
//! The balance check alone skips quoted spans.

use fieldlogic_domain::{Error, Result};

/// Byte offset of the leftmost `separator` occurring at parenthesis depth 0
pub(crate) fn find_top_level(expr: &str, separator: &str) -> Option<usize> {
    let bytes = expr.as_bytes();
    let needle = separator.as_bytes();
    let mut depth: usize = 0;
    for (i, byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && bytes[i..].starts_with(needle) => return Some(i),
            _ => {}
        }
    }
    None
}

/// Split at every top-level `separator`, left to right
///
/// Equivalent to repeatedly splitting at the leftmost depth-0 match. An
/// expression without a top-level separator comes back as a single term.
pub(crate) fn split_top_level<'a>(expr: &'a str, separator: &str) -> Vec<&'a str> {
    let mut terms = Vec::new();
    let mut rest = expr;
    while let Some(idx) = find_top_level(rest, separator) {
        terms.push(&rest[..idx]);
        rest = &rest[idx + separator.len()..];
    }
    terms.push(rest);
    terms
}

/// Inner text when the first `(` is closed by the final `)`
pub(crate) fn strip_wrapping_parens(expr: &str) -> Option<&str> {
    if !(expr.starts_with('(') && expr.ends_with(')')) {
        return None;
    }
    let mut depth: usize = 0;
    for (i, byte) in expr.bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (i == expr.len() - 1).then(|| &expr[1..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Reject expressions whose parentheses do not pair up
///
/// Parentheses inside single- or double-quoted spans are literal text and
/// are not counted.
pub(crate) fn check_balance(expr: &str) -> Result<()> {
    let mut depth: usize = 0;
    let mut quote: Option<u8> = None;
    for (i, byte) in expr.bytes().enumerate() {
        match (quote, byte) {
            (Some(open), _) if byte == open => quote = None,
            (Some(_), _) => {}
            (None, b'\'' | b'"') => quote = Some(byte),
            (None, b'(') => depth += 1,
            (None, b')') => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::expression(format!("unmatched ')' at offset {i}"))
                })?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(Error::expression(format!("{depth} unclosed '('")))
    }
}
