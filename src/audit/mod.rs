use thiserror::Error;
use tracing::info;

use crate::domain::{DecisionRecord, Plate, Verdict, EXTRACTION_FAILURE_REASON};
use crate::storage::{DecisionStore, StoreError};

/// Errors that can occur while logging decisions.
#[derive(Error, Debug)]
pub enum AuditError {
    /// A denial was handed over without a reason. This is a programming
    /// contract violation; the malformed record is never written.
    #[error("denial recorded without a reason for plate {plate:?}")]
    MissingReason { plate: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Append-only sink for admission decisions.
///
/// Owns the store handle for the process. Every call appends exactly one
/// record; there is no deduplication and no way to amend past entries.
pub struct DecisionLogger<S: DecisionStore> {
    store: S,
}

impl<S: DecisionStore> DecisionLogger<S> {
    pub fn new(store: S) -> Self {
        DecisionLogger { store }
    }

    /// Record one decision.
    ///
    /// A denial must carry a non-empty reason; an allowance never stores
    /// one, whatever the caller passed.
    pub fn record(
        &mut self,
        plate: &Plate,
        allowed: bool,
        reason: Option<&str>,
    ) -> Result<DecisionRecord, AuditError> {
        let verdict = if allowed {
            Verdict::Allowed
        } else {
            match reason {
                Some(reason) if !reason.is_empty() => Verdict::denied(reason),
                _ => {
                    return Err(AuditError::MissingReason {
                        plate: plate.as_str().to_string(),
                    })
                }
            }
        };

        self.record_verdict(plate, &verdict)
    }

    /// Record a verdict produced by the rule engine.
    ///
    /// A denial with an empty reason is the same contract violation as a
    /// missing one and is rejected before anything reaches the store.
    pub fn record_verdict(
        &mut self,
        plate: &Plate,
        verdict: &Verdict,
    ) -> Result<DecisionRecord, AuditError> {
        if verdict.reason().is_some_and(str::is_empty) {
            return Err(AuditError::MissingReason {
                plate: plate.as_str().to_string(),
            });
        }

        let record = DecisionRecord::from_verdict(plate, verdict);
        self.store.append(&record)?;

        info!(%plate, allowed = verdict.is_allowed(), reason = verdict.reason(), "decision recorded");

        Ok(record)
    }

    /// Record an extraction failure as a denial, bypassing rule evaluation.
    pub fn record_extraction_failure(
        &mut self,
        plate: &Plate,
    ) -> Result<DecisionRecord, AuditError> {
        self.record_verdict(plate, &Verdict::denied(EXTRACTION_FAILURE_REASON))
    }

    /// All stored records, in storage order. Diagnostic affordance only.
    pub fn dump(&mut self) -> Result<Vec<DecisionRecord>, AuditError> {
        Ok(self.store.records()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Admittance;
    use crate::storage::MemoryStore;

    fn logger() -> DecisionLogger<MemoryStore> {
        DecisionLogger::new(MemoryStore::new())
    }

    #[test]
    fn test_denial_without_reason_is_rejected() {
        let mut logger = logger();

        let err = logger.record(&Plate::new("1234525"), false, None).unwrap_err();
        assert!(matches!(err, AuditError::MissingReason { .. }));

        let err = logger
            .record(&Plate::new("1234525"), false, Some(""))
            .unwrap_err();
        assert!(matches!(err, AuditError::MissingReason { .. }));

        // Nothing was written
        assert!(logger.dump().unwrap().is_empty());
    }

    #[test]
    fn test_record_verdict_rejects_empty_reason_denial() {
        let mut logger = logger();

        let err = logger
            .record_verdict(&Plate::new("1234525"), &Verdict::denied(""))
            .unwrap_err();
        assert!(matches!(err, AuditError::MissingReason { .. }));

        // The malformed record never reached the store
        assert!(logger.dump().unwrap().is_empty());
    }

    #[test]
    fn test_allowance_never_stores_a_reason() {
        let mut logger = logger();

        let record = logger
            .record(&Plate::new("1234571"), true, Some("ignored"))
            .unwrap();

        assert_eq!(record.allowed, Admittance::Yes);
        assert_eq!(record.reason, None);
    }

    #[test]
    fn test_denial_stores_reason() {
        let mut logger = logger();

        let record = logger
            .record(&Plate::new("1234526"), false, Some("Public transportation vehicle"))
            .unwrap();

        assert_eq!(record.allowed, Admittance::No);
        assert_eq!(record.reason.as_deref(), Some("Public transportation vehicle"));
    }

    #[test]
    fn test_extraction_failure_uses_fixed_reason() {
        let mut logger = logger();

        let record = logger.record_extraction_failure(&Plate::new("")).unwrap();

        assert_eq!(record.allowed, Admittance::No);
        assert_eq!(record.reason.as_deref(), Some(EXTRACTION_FAILURE_REASON));
    }

    #[test]
    fn test_record_is_not_idempotent() {
        let mut logger = logger();
        let plate = Plate::new("1111111");

        logger.record(&plate, false, Some("Operated by gas")).unwrap();
        logger.record(&plate, false, Some("Operated by gas")).unwrap();

        assert_eq!(logger.dump().unwrap().len(), 2);
    }

    #[test]
    fn test_dump_preserves_insertion_order() {
        let mut logger = logger();

        logger.record(&Plate::new("1234571"), true, None).unwrap();
        logger
            .record(&Plate::new("A234567"), false, Some("Military and law enforcement vehicle"))
            .unwrap();

        let records = logger.dump().unwrap();
        assert_eq!(records[0].plate.as_str(), "1234571");
        assert_eq!(records[1].plate.as_str(), "A234567");
    }
}
