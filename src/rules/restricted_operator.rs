use crate::domain::Plate;
use crate::rules::traits::{PlateRule, RuleResult};

pub const REASON: &str = "Military and law enforcement vehicle";

/// Restricted operator rule.
///
/// Military and law enforcement plates are marked with an alphabetic
/// character anywhere in the plate. Those vehicles may not enter.
#[derive(Debug)]
pub struct RestrictedOperatorRule {
    id: String,
}

impl RestrictedOperatorRule {
    pub fn new(id: String) -> Self {
        RestrictedOperatorRule { id }
    }
}

impl PlateRule for RestrictedOperatorRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, plate: &Plate) -> RuleResult {
        if plate.has_alpha() {
            return RuleResult::deny(REASON);
        }

        RuleResult::pass()
    }
}
