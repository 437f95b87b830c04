//! Content rules: substrings, prefixes, enumerations, booleans, extensions

use super::{param_list, text};
use crate::registry::RuleRegistry;
use fieldlogic_domain::FieldValue;
use fieldlogic_domain::constants::IMAGE_EXTENSIONS;

const TRUE_SPELLINGS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_SPELLINGS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register("contains", |value, param, _| {
        text(value).contains(param.unwrap_or_default())
    });
    for name in ["notcontains", "excludes"] {
        registry.register(name, |value, param, _| {
            let needle = param.unwrap_or_default();
            needle.is_empty() || !text(value).contains(needle)
        });
    }
    registry.register("containsany", |value, param, _| {
        let haystack = text(value);
        param.unwrap_or_default().chars().any(|c| haystack.contains(c))
    });
    registry.register("excludesall", |value, param, _| {
        let haystack = text(value);
        !param.unwrap_or_default().chars().any(|c| haystack.contains(c))
    });

    registry.register("startswith", |value, param, _| {
        text(value).starts_with(param.unwrap_or_default())
    });
    registry.register("endswith", |value, param, _| {
        text(value).ends_with(param.unwrap_or_default())
    });
    registry.register("startsnotwith", |value, param, _| {
        !text(value).starts_with(param.unwrap_or_default())
    });
    registry.register("endsnotwith", |value, param, _| {
        !text(value).ends_with(param.unwrap_or_default())
    });

    registry.register("oneof", |value, param, _| {
        param_list(param).contains(&text(value).as_str())
    });
    registry.register("neof", |value, param, _| {
        !param_list(param).contains(&text(value).as_str())
    });

    registry.register("boolean", |value, _, _| is_boolean(value));
    registry.register("ext", |value, param, _| has_allowed_extension(value, param));
}

fn is_boolean(value: &FieldValue) -> bool {
    match value {
        FieldValue::Bool(_) => true,
        FieldValue::Number(n) => *n == 0.0 || *n == 1.0,
        FieldValue::String(s) => {
            TRUE_SPELLINGS.contains(&s.as_str()) || FALSE_SPELLINGS.contains(&s.as_str())
        }
        _ => false,
    }
}

/// Every file name in `value` ends with one of the allowed extensions
///
/// Values may be a single name, a file-like map with a `name` entry, or a
/// list of either. Without a parameter any extension passes.
fn has_allowed_extension(value: &FieldValue, param: Option<&str>) -> bool {
    let allowed = allowed_extensions(param);
    if allowed.is_empty() {
        return true;
    }
    let names = match value {
        FieldValue::List(items) => items.iter().map(file_name).collect::<Vec<_>>(),
        single => vec![file_name(single)],
    };
    !names.is_empty()
        && names.iter().all(|name| {
            name.rsplit_once('.')
                .is_some_and(|(_, ext)| allowed.iter().any(|a| a == &ext.to_lowercase()))
        })
}

fn allowed_extensions(param: Option<&str>) -> Vec<String> {
    param_list(param)
        .into_iter()
        .flat_map(|item| {
            if item.eq_ignore_ascii_case("image") {
                IMAGE_EXTENSIONS.iter().map(ToString::to_string).collect()
            } else {
                vec![item.trim_start_matches('.').to_lowercase()]
            }
        })
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn file_name(value: &FieldValue) -> String {
    match value {
        FieldValue::Map(entries) => entries.get("name").map(text).unwrap_or_default(),
        other => text(other),
    }
}
