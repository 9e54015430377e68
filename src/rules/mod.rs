pub mod gas_operated;
pub mod prohibited_suffix;
pub mod public_transport;
pub mod restricted_operator;
pub mod traits;

pub use gas_operated::GasOperatedRule;
pub use prohibited_suffix::ProhibitedSuffixRule;
pub use public_transport::PublicTransportRule;
pub use restricted_operator::RestrictedOperatorRule;
pub use traits::{PlateRule, RuleResult};

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Plate, Policy, Verdict};

/// The admission rules compiled from a policy, in evaluation order.
///
/// Priority is fixed: public transport, then restricted operator, then
/// prohibited numeric suffix, then gas operated. Evaluation stops at the
/// first rule that triggers.
pub struct RuleSet {
    rules: Vec<Arc<dyn PlateRule>>,
    pub policy_version: String,
}

impl RuleSet {
    /// Build the rule chain from a policy.
    pub fn from_policy(policy: &Policy) -> Self {
        let params = &policy.params;

        let transport_suffixes: HashSet<String> =
            params.public_transport_suffixes.iter().cloned().collect();
        let prohibited_suffixes: HashSet<String> =
            params.prohibited_digit_suffixes.iter().cloned().collect();
        let gas_counts: HashSet<usize> = params.gas_digit_counts.iter().copied().collect();

        let rules: Vec<Arc<dyn PlateRule>> = vec![
            Arc::new(PublicTransportRule::new(
                "PUBLIC_TRANSPORT".to_string(),
                transport_suffixes,
            )),
            Arc::new(RestrictedOperatorRule::new(
                "RESTRICTED_OPERATOR".to_string(),
            )),
            Arc::new(ProhibitedSuffixRule::new(
                "PROHIBITED_SUFFIX".to_string(),
                prohibited_suffixes,
                params.suffix_digit_count,
            )),
            Arc::new(GasOperatedRule::new(
                "GAS_OPERATED".to_string(),
                gas_counts,
                params.gas_digit_sum_divisor,
            )),
        ];

        RuleSet {
            rules,
            policy_version: policy.version.clone(),
        }
    }

    /// Evaluate a plate against the chain, first match wins.
    pub fn evaluate(&self, plate: &Plate) -> Verdict {
        for rule in &self.rules {
            if let RuleResult::Deny { reason } = rule.evaluate(plate) {
                debug!(rule = rule.id(), %plate, "rule triggered");
                return Verdict::denied(reason);
            }
        }

        Verdict::Allowed
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
