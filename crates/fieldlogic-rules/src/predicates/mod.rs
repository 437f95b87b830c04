//! Standard rule predicates, grouped by category

mod checksum;
mod compare;
mod composition;
mod content;
mod datetime;
mod encoding;
mod format;
mod network;
mod presence;

use crate::registry::RuleRegistry;
use fieldlogic_domain::FieldValue;
use fieldlogic_domain::value::string_to_number;

pub use datetime::layout_to_pattern;

/// Populate `registry` with every standard rule
pub(crate) fn register_standard(registry: &mut RuleRegistry) {
    presence::register(registry);
    compare::register(registry);
    composition::register(registry);
    format::register(registry);
    network::register(registry);
    encoding::register(registry);
    checksum::register(registry);
    datetime::register(registry);
    content::register(registry);
}

/// Text form every string-shaped rule inspects
fn text(value: &FieldValue) -> String {
    value.to_display_string()
}

/// Numeric reading of a rule parameter (NaN when absent or non-numeric)
fn param_number(param: Option<&str>) -> f64 {
    param.map_or(f64::NAN, string_to_number)
}

/// List parameter items, split on `|` and whitespace
fn param_list(param: Option<&str>) -> Vec<&str> {
    param
        .unwrap_or_default()
        .split(|c: char| c == '|' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .collect()
}
