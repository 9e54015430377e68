use std::collections::HashSet;

use crate::domain::Plate;
use crate::rules::traits::{PlateRule, RuleResult};

pub const REASON: &str = "7 digits number and last two digits are 85/86/87/88/89/00";

/// Prohibited numeric suffix rule.
///
/// Plates whose digit sequence has exactly the configured length and ends
/// in a prohibited digit pair are refused. The pair is compared as a
/// two-character string with the leading zero preserved ("05", not "5").
#[derive(Debug)]
pub struct ProhibitedSuffixRule {
    id: String,
    /// Prohibited last-two-digit pairs
    suffixes: HashSet<String>,
    /// Exact digit count the rule applies to
    digit_count: usize,
}

impl ProhibitedSuffixRule {
    pub fn new(id: String, suffixes: HashSet<String>, digit_count: usize) -> Self {
        ProhibitedSuffixRule {
            id,
            suffixes,
            digit_count,
        }
    }
}

impl PlateRule for ProhibitedSuffixRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, plate: &Plate) -> RuleResult {
        let digits = plate.digits();

        if digits.len() != self.digit_count {
            return RuleResult::pass();
        }

        // digit_count >= 2 is enforced at policy load, so last_two is present
        match digits.last_two() {
            Some(pair) if self.suffixes.contains(&pair) => RuleResult::deny(REASON),
            _ => RuleResult::pass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> ProhibitedSuffixRule {
        ProhibitedSuffixRule::new(
            "PROHIBITED_SUFFIX".to_string(),
            ["85", "86", "87", "88", "89", "00"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            7,
        )
    }

    #[test]
    fn test_seven_digits_prohibited_suffix_denied() {
        let result = rule().evaluate(&Plate::new("1234585"));
        assert!(result.is_hit());
        assert_eq!(result.reason(), Some(REASON));

        assert!(rule().evaluate(&Plate::new("1234500")).is_hit());
    }

    #[test]
    fn test_leading_zero_pair_is_two_characters() {
        // Digits 0,5 must compare as "05", which is not prohibited
        assert!(!rule().evaluate(&Plate::new("1234505")).is_hit());
    }

    #[test]
    fn test_wrong_digit_count_passes() {
        // Eight digits, even with a prohibited pair at the end
        assert!(!rule().evaluate(&Plate::new("12345685")).is_hit());
        // Six digits
        assert!(!rule().evaluate(&Plate::new("123485")).is_hit());
    }

    #[test]
    fn test_allowed_suffix_passes() {
        assert!(!rule().evaluate(&Plate::new("1234571")).is_hit());
    }

    #[test]
    fn test_fewer_than_two_digits_passes() {
        assert!(!rule().evaluate(&Plate::new("5")).is_hit());
        assert!(!rule().evaluate(&Plate::new("")).is_hit());
    }
}
