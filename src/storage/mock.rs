use crate::domain::DecisionRecord;

use super::traits::{DecisionStore, StoreError};

/// In-memory decision store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<DecisionRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stored records (for assertions).
    pub fn recorded(&self) -> &[DecisionRecord] {
        &self.records
    }
}

impl DecisionStore for MemoryStore {
    fn append(&mut self, record: &DecisionRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn records(&mut self) -> Result<Vec<DecisionRecord>, StoreError> {
        Ok(self.records.clone())
    }
}
