use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::domain::Policy;
use crate::rules::RuleSet;

/// Errors that can occur during policy loading.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Load a policy from a YAML file.
pub fn load_policy(path: impl AsRef<Path>) -> Result<Policy, PolicyError> {
    let content = fs::read_to_string(path)?;
    let policy: Policy = serde_yaml::from_str(&content)?;

    validate_policy(&policy)?;

    Ok(policy)
}

/// Load the policy at `path` if it exists, the built-in default otherwise.
pub fn load_policy_or_default(path: impl AsRef<Path>) -> Result<Policy, PolicyError> {
    let path = path.as_ref();

    if path.exists() {
        load_policy(path)
    } else {
        info!(path = %path.display(), "no policy file, using built-in default");
        Ok(Policy::default())
    }
}

/// Validate policy configuration.
fn validate_policy(policy: &Policy) -> Result<(), PolicyError> {
    if policy.version.is_empty() {
        return Err(PolicyError::Validation(
            "Policy version cannot be empty".to_string(),
        ));
    }

    let params = &policy.params;

    for suffix in params
        .public_transport_suffixes
        .iter()
        .chain(&params.prohibited_digit_suffixes)
    {
        if suffix.chars().count() != 2 {
            return Err(PolicyError::Validation(format!(
                "Suffix entries must be two characters, got {suffix:?}"
            )));
        }
    }

    if params.suffix_digit_count < 2 {
        return Err(PolicyError::Validation(
            "suffix_digit_count must be at least 2".to_string(),
        ));
    }

    if params.gas_digit_counts.is_empty() {
        return Err(PolicyError::Validation(
            "gas_digit_counts cannot be empty".to_string(),
        ));
    }

    if params.gas_digit_sum_divisor == 0 {
        return Err(PolicyError::Validation(
            "gas_digit_sum_divisor cannot be zero".to_string(),
        ));
    }

    Ok(())
}

/// Policy loader bound to a policy file path.
pub struct PolicyLoader {
    policy_path: String,
}

impl PolicyLoader {
    pub fn new(policy_path: impl Into<String>) -> Self {
        PolicyLoader {
            policy_path: policy_path.into(),
        }
    }

    /// Load the policy and compile it into a RuleSet.
    pub fn load(&self) -> Result<(Policy, RuleSet), PolicyError> {
        let policy = load_policy_or_default(&self.policy_path)?;
        let ruleset = RuleSet::from_policy(&policy);

        Ok((policy, ruleset))
    }

    /// Get the policy file path.
    pub fn policy_path(&self) -> &str {
        &self.policy_path
    }
}
