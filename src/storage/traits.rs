use std::io;

use thiserror::Error;

use crate::domain::DecisionRecord;

/// Errors that can occur in a decision store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Append/read capability over the decision log.
///
/// The log is write-once, read-many: implementations expose no update or
/// delete. `records` returns entries in storage order, which for the
/// journal file is insertion order.
pub trait DecisionStore: Send {
    /// Append one record to the store.
    fn append(&mut self, record: &DecisionRecord) -> Result<(), StoreError>;

    /// Enumerate all stored records, in storage order.
    fn records(&mut self) -> Result<Vec<DecisionRecord>, StoreError>;
}
