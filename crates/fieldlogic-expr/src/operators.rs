//! Comparison operators and permitted method calls

use fieldlogic_domain::FieldValue;

/// Comparison operators in the order they are searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    StrictEq,
    StrictNe,
    LooseEq,
    LooseNe,
    Gte,
    Lte,
    Gt,
    Lt,
}

impl ComparisonOperator {
    /// Search priority: the first operator whose symbol occurs wins
    pub const PRIORITY: [Self; 8] = [
        Self::StrictEq,
        Self::StrictNe,
        Self::LooseEq,
        Self::LooseNe,
        Self::Gte,
        Self::Lte,
        Self::Gt,
        Self::Lt,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::StrictEq => "===",
            Self::StrictNe => "!==",
            Self::LooseEq => "==",
            Self::LooseNe => "!=",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }

    /// Compare two resolved operands
    ///
    /// Relational operators compare numerically; NaN on either side is false.
    pub fn apply(self, left: &FieldValue, right: &FieldValue) -> bool {
        match self {
            Self::StrictEq => left.strict_eq(right),
            Self::StrictNe => !left.strict_eq(right),
            Self::LooseEq => left.loose_eq(right),
            Self::LooseNe => !left.loose_eq(right),
            Self::Gte => left.to_number() >= right.to_number(),
            Self::Lte => left.to_number() <= right.to_number(),
            Self::Gt => left.to_number() > right.to_number(),
            Self::Lt => left.to_number() < right.to_number(),
        }
    }
}

/// The only methods an expression may call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodName {
    Includes,
    StartsWith,
    EndsWith,
}

impl MethodName {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "includes" => Some(Self::Includes),
            "startsWith" => Some(Self::StartsWith),
            "endsWith" => Some(Self::EndsWith),
            _ => None,
        }
    }

    /// Apply the method to a resolved receiver
    ///
    /// Strings stringify the argument; lists support strict membership via
    /// `includes` only. Every other combination is false.
    pub fn call(self, receiver: &FieldValue, argument: &FieldValue) -> bool {
        match (receiver, self) {
            (FieldValue::String(s), method) => {
                let needle = argument.to_display_string();
                match method {
                    Self::Includes => s.contains(needle.as_str()),
                    Self::StartsWith => s.starts_with(needle.as_str()),
                    Self::EndsWith => s.ends_with(needle.as_str()),
                }
            }
            (FieldValue::List(items), Self::Includes) => {
                items.iter().any(|item| item.strict_eq(argument))
            }
            _ => false,
        }
    }
}
