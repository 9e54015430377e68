use std::fmt::Debug;

use crate::domain::Plate;

/// Trait for admission rules.
///
/// Rules are pure, total predicates over the plate string: no I/O, no
/// state, and no failure mode for any plate input, however short.
pub trait PlateRule: Send + Sync + Debug {
    /// Unique identifier for this rule.
    fn id(&self) -> &str;

    /// Evaluate the rule against a plate.
    ///
    /// Returns a RuleResult indicating whether the rule triggered and,
    /// if so, the denial reason it carries.
    fn evaluate(&self, plate: &Plate) -> RuleResult;
}

/// Result of evaluating a single rule.
///
/// A denial carries its reason by construction; a rule cannot trigger
/// without naming one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleResult {
    /// The rule did not trigger.
    Pass,
    /// The rule triggered with a denial reason.
    Deny { reason: String },
}

impl RuleResult {
    /// The rule did not trigger.
    #[inline]
    pub fn pass() -> Self {
        RuleResult::Pass
    }

    /// The rule triggered with the given denial reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        RuleResult::Deny {
            reason: reason.into(),
        }
    }

    /// Whether the rule triggered.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, RuleResult::Deny { .. })
    }

    /// The denial reason, if the rule triggered.
    pub fn reason(&self) -> Option<&str> {
        match self {
            RuleResult::Pass => None,
            RuleResult::Deny { reason } => Some(reason),
        }
    }
}

impl Default for RuleResult {
    fn default() -> Self {
        RuleResult::pass()
    }
}
