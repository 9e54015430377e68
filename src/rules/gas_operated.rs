use std::collections::HashSet;

use crate::domain::Plate;
use crate::rules::traits::{PlateRule, RuleResult};

pub const REASON: &str = "Operated by gas";

/// Gas-operated vehicle rule.
///
/// Gas conversions are registered with plates of 7 or 8 digits whose digit
/// sum divides evenly by 7; those vehicles may not park indoors. Note the
/// digit-count window is wider than the prohibited-suffix rule's; that
/// asymmetry is lot policy, not an accident.
#[derive(Debug)]
pub struct GasOperatedRule {
    id: String,
    /// Digit counts the rule applies to
    digit_counts: HashSet<usize>,
    /// Divisor applied to the digit sum
    divisor: u32,
}

impl GasOperatedRule {
    pub fn new(id: String, digit_counts: HashSet<usize>, divisor: u32) -> Self {
        GasOperatedRule {
            id,
            digit_counts,
            divisor,
        }
    }
}

impl PlateRule for GasOperatedRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, plate: &Plate) -> RuleResult {
        let digits = plate.digits();

        // divisor != 0 is enforced at policy load
        if self.digit_counts.contains(&digits.len()) && digits.sum() % self.divisor == 0 {
            return RuleResult::deny(REASON);
        }

        RuleResult::pass()
    }
}
