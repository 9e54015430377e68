use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed reason recorded when the extraction service returns no plate text.
pub const EXTRACTION_FAILURE_REASON: &str = "unable to extract the car plate";

/// Outcome of evaluating a plate against the admission rules.
///
/// A denial always names the rule's reason; an allowance never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The plate may enter the lot.
    Allowed,
    /// The plate is refused entry.
    Denied { reason: String },
}

impl Verdict {
    /// Build a denial from any reason string.
    pub fn denied(reason: impl Into<String>) -> Self {
        Verdict::Denied {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }

    /// The denial reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Allowed => None,
            Verdict::Denied { reason } => Some(reason),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Allowed => write!(f, "Access granted"),
            Verdict::Denied { reason } => write!(f, "Access denied, {reason}"),
        }
    }
}
