//! Comparison and size rules
//!
//! Literal comparisons (`eq`, `lt`, ...), sibling-field comparisons
//! (`eqfield`, `ltfield`, ...) and size checks (`len`, `min`, `max`).
//! Relational checks coerce both sides to numbers; NaN never passes.

use super::param_number;
use crate::registry::RuleRegistry;
use fieldlogic_domain::{FieldValue, Subject};

#[derive(Clone, Copy)]
enum Relation {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Relation {
    fn holds(self, left: f64, right: f64) -> bool {
        match self {
            Self::Lt => left < right,
            Self::Lte => left <= right,
            Self::Gt => left > right,
            Self::Gte => left >= right,
        }
    }
}

pub(super) fn register(registry: &mut RuleRegistry) {
    registry.register("eq", |value, param, _| literal_eq(value, param));
    registry.register("ne", |value, param, _| !literal_eq(value, param));

    for (name, relation) in [
        ("lt", Relation::Lt),
        ("lte", Relation::Lte),
        ("gt", Relation::Gt),
        ("gte", Relation::Gte),
    ] {
        registry.register(name, move |value, param, _| {
            relation.holds(value.to_number(), param_number(param))
        });
    }

    registry.register("eqfield", |value, param, subject| {
        value.loose_eq(&sibling(param, subject))
    });
    registry.register("nefield", |value, param, subject| {
        !value.loose_eq(&sibling(param, subject))
    });
    for (name, relation) in [
        ("ltfield", Relation::Lt),
        ("ltefield", Relation::Lte),
        ("gtfield", Relation::Gt),
        ("gtefield", Relation::Gte),
    ] {
        registry.register(name, move |value, param, subject| {
            relation.holds(value.to_number(), sibling(param, subject).to_number())
        });
    }

    registry.register("len", |value, param, _| {
        param
            .and_then(|p| p.trim().parse::<usize>().ok())
            .is_some_and(|expected| value.length() == expected)
    });
    registry.register("min", |value, param, subject| {
        Relation::Gte.holds(measure(value, subject), param_number(param))
    });
    registry.register("max", |value, param, subject| {
        Relation::Lte.holds(measure(value, subject), param_number(param))
    });
}

fn literal_eq(value: &FieldValue, param: Option<&str>) -> bool {
    value.loose_eq(&FieldValue::from(param.unwrap_or_default()))
}

fn sibling(param: Option<&str>, subject: &dyn Subject) -> FieldValue {
    param.map_or(FieldValue::Undefined, |name| subject.field_value(name.trim()))
}

/// Numeric subjects are measured by value, everything else by length
fn measure(value: &FieldValue, subject: &dyn Subject) -> f64 {
    if subject.kind().is_numeric() {
        value.to_number()
    } else {
        value.length() as f64
    }
}
