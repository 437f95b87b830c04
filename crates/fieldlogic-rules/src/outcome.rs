//! Rule chain results

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Result of validating a value against a rule chain
///
/// Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "OutcomeRepr")]
pub enum RuleOutcome {
    Valid,
    Invalid {
        failed: String,
        param: Option<String>,
    },
}

impl RuleOutcome {
    pub fn invalid(failed: impl Into<String>, param: Option<String>) -> Self {
        Self::Invalid {
            failed: failed.into(),
            param,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Name of the failing rule
    pub fn failed(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { failed, .. } => Some(failed),
        }
    }

    /// Parameter of the failing rule
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { param, .. } => param.as_deref(),
        }
    }
}

impl Serialize for RuleOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("valid", &true)?;
                map.end()
            }
            Self::Invalid { failed, param } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("valid", &false)?;
                map.serialize_entry("failed", failed)?;
                map.serialize_entry("param", param)?;
                map.end()
            }
        }
    }
}

#[derive(Deserialize)]
struct OutcomeRepr {
    valid: bool,
    #[serde(default)]
    failed: Option<String>,
    #[serde(default)]
    param: Option<String>,
}

impl From<OutcomeRepr> for RuleOutcome {
    fn from(repr: OutcomeRepr) -> Self {
        if repr.valid {
            Self::Valid
        } else {
            Self::Invalid {
                failed: repr.failed.unwrap_or_default(),
                param: repr.param,
            }
        }
    }
}
