use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::decision::Verdict;
use super::plate::Plate;

/// The "allowed" field of a stored record.
///
/// The log format predates this implementation and uses the strings
/// "Yes"/"No" rather than a native boolean; readers depend on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Admittance {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
}

impl From<bool> for Admittance {
    fn from(allowed: bool) -> Self {
        if allowed {
            Admittance::Yes
        } else {
            Admittance::No
        }
    }
}

/// One persisted admission decision.
///
/// Immutable once written. A denied record always carries a non-empty
/// reason; an allowed record never carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub plate: Plate,

    pub allowed: Admittance,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    pub time: DateTime<Utc>,
}

impl DecisionRecord {
    /// Build a record for a verdict, stamped with the current time.
    pub fn from_verdict(plate: &Plate, verdict: &Verdict) -> Self {
        DecisionRecord {
            plate: plate.clone(),
            allowed: Admittance::from(verdict.is_allowed()),
            reason: verdict.reason().map(str::to_string),
            time: Utc::now(),
        }
    }
}
