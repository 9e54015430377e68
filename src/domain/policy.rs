use serde::{Deserialize, Serialize};

/// Policy configuration defining the admission rule parameters.
///
/// The parameters exist so the lot's policy can change without touching
/// rule logic; the defaults reproduce the operator's current policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Policy version identifier
    #[serde(rename = "policy_version")]
    pub version: String,

    /// Parameters used by rules
    #[serde(default)]
    pub params: RuleParams,
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            version: "builtin-default".to_string(),
            params: RuleParams::default(),
        }
    }
}

/// Parameters used by the admission rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleParams {
    /// Plate suffixes reserved for public transport
    #[serde(default = "default_public_transport_suffixes")]
    pub public_transport_suffixes: Vec<String>,

    /// Prohibited last-two-digit pairs for the numeric suffix rule
    #[serde(default = "default_prohibited_digit_suffixes")]
    pub prohibited_digit_suffixes: Vec<String>,

    /// Exact digit count required by the numeric suffix rule
    #[serde(default = "default_suffix_digit_count")]
    pub suffix_digit_count: usize,

    /// Digit counts subject to the gas-operated divisibility rule.
    /// Intentionally wider than `suffix_digit_count`; current lot policy.
    #[serde(default = "default_gas_digit_counts")]
    pub gas_digit_counts: Vec<usize>,

    /// Divisor applied to the digit sum by the gas-operated rule
    #[serde(default = "default_gas_digit_sum_divisor")]
    pub gas_digit_sum_divisor: u32,
}

fn default_public_transport_suffixes() -> Vec<String> {
    vec!["25".to_string(), "26".to_string()]
}

fn default_prohibited_digit_suffixes() -> Vec<String> {
    ["85", "86", "87", "88", "89", "00"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_suffix_digit_count() -> usize {
    7
}

fn default_gas_digit_counts() -> Vec<usize> {
    vec![7, 8]
}

fn default_gas_digit_sum_divisor() -> u32 {
    7
}

impl Default for RuleParams {
    fn default() -> Self {
        RuleParams {
            public_transport_suffixes: default_public_transport_suffixes(),
            prohibited_digit_suffixes: default_prohibited_digit_suffixes(),
            suffix_digit_count: default_suffix_digit_count(),
            gas_digit_counts: default_gas_digit_counts(),
            gas_digit_sum_divisor: default_gas_digit_sum_divisor(),
        }
    }
}
