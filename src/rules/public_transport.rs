use std::collections::HashSet;

use crate::domain::Plate;
use crate::rules::traits::{PlateRule, RuleResult};

pub const REASON: &str = "Public transportation vehicle";

/// Public transport rule.
///
/// Buses and other public transport vehicles carry plates ending in a
/// reserved suffix and may not enter the lot. The check looks at the last
/// two characters of the raw plate, not the digit sequence.
#[derive(Debug)]
pub struct PublicTransportRule {
    id: String,
    /// Reserved two-character plate suffixes
    suffixes: HashSet<String>,
}

impl PublicTransportRule {
    pub fn new(id: String, suffixes: HashSet<String>) -> Self {
        PublicTransportRule { id, suffixes }
    }
}

impl PlateRule for PublicTransportRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn evaluate(&self, plate: &Plate) -> RuleResult {
        if self.suffixes.contains(plate.suffix(2)) {
            return RuleResult::deny(REASON);
        }

        RuleResult::pass()
    }
}
